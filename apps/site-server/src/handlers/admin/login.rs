//! Sign-in and sign-out.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

use sagepath_core::domain::validate_login;
use sagepath_core::ports::AuthError;
use sagepath_shared::LoginRequest;

use super::DASHBOARD_PATH;
use crate::middleware::auth::MaybeSession;
use crate::middleware::error::{AppResult, see_other};
use crate::session::removal_cookie;
use crate::state::AppState;
use crate::views;

/// GET /me/admin
pub async fn form(state: web::Data<AppState>, viewer: MaybeSession) -> HttpResponse {
    if viewer.is_signed_in() {
        return see_other(DASHBOARD_PATH);
    }
    views::html(
        StatusCode::OK,
        views::admin::login(&state.site, "", None, None),
    )
}

/// POST /me/admin
pub async fn submit(
    state: web::Data<AppState>,
    viewer: MaybeSession,
    body: web::Form<LoginRequest>,
) -> AppResult<HttpResponse> {
    if viewer.is_signed_in() {
        return Ok(see_other(DASHBOARD_PATH));
    }
    let req = body.into_inner();

    if let Err(errors) = validate_login(&req.email, &req.password) {
        return Ok(views::html(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::admin::login(&state.site, &req.email, Some(&errors), None),
        ));
    }

    let session = match state.auth.sign_in(&req.email, &req.password).await {
        Ok(session) => session,
        Err(AuthError::Rejected(message)) => {
            tracing::info!(email = %req.email, "Sign-in rejected");
            return Ok(views::html(
                StatusCode::UNAUTHORIZED,
                views::admin::login(&state.site, &req.email, None, Some(&message)),
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, "Sign-in failed");
            return Ok(views::html(
                StatusCode::SERVICE_UNAVAILABLE,
                views::admin::login(
                    &state.site,
                    &req.email,
                    None,
                    Some("An unexpected error occurred. Please try again."),
                ),
            ));
        }
    };

    let cookie = state.sessions.establish(session).await?;
    Ok(HttpResponse::SeeOther()
        .insert_header((actix_web::http::header::LOCATION, DASHBOARD_PATH))
        .cookie(cookie)
        .finish())
}

/// POST /me/admin/logout
///
/// The local session goes first; remote revocation is best-effort.
pub async fn logout(state: web::Data<AppState>, viewer: MaybeSession) -> HttpResponse {
    if let Some(active) = viewer.0 {
        state.sessions.destroy(active.id).await;
        if let Err(e) = state.auth.sign_out(&active.session).await {
            tracing::warn!(error = %e, "Remote sign-out failed");
        }
        tracing::info!(session_id = %active.id, "Admin signed out");
    }

    HttpResponse::SeeOther()
        .insert_header((actix_web::http::header::LOCATION, "/"))
        .cookie(removal_cookie())
        .finish()
}
