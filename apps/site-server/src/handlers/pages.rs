//! Informational pages.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::auth::MaybeSession;
use crate::state::AppState;
use crate::views;

use super::chrome;

/// GET /
///
/// A failed listing only hides the latest-posts section.
pub async fn home(
    state: web::Data<AppState>,
    req: HttpRequest,
    viewer: MaybeSession,
) -> HttpResponse {
    let recent = match state.posts.latest().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load recent posts");
            Vec::new()
        }
    };
    let chrome = chrome(&state, &req, &viewer);
    views::html(StatusCode::OK, views::pages::home(&chrome, &recent))
}

pub async fn about(
    state: web::Data<AppState>,
    req: HttpRequest,
    viewer: MaybeSession,
) -> HttpResponse {
    let chrome = chrome(&state, &req, &viewer);
    views::html(StatusCode::OK, views::pages::about(&chrome))
}

pub async fn services(
    state: web::Data<AppState>,
    req: HttpRequest,
    viewer: MaybeSession,
) -> HttpResponse {
    let chrome = chrome(&state, &req, &viewer);
    views::html(StatusCode::OK, views::pages::services(&chrome))
}

pub async fn faq(
    state: web::Data<AppState>,
    req: HttpRequest,
    viewer: MaybeSession,
) -> HttpResponse {
    let chrome = chrome(&state, &req, &viewer);
    views::html(StatusCode::OK, views::pages::faq(&chrome))
}

pub async fn contact(
    state: web::Data<AppState>,
    req: HttpRequest,
    viewer: MaybeSession,
) -> HttpResponse {
    let chrome = chrome(&state, &req, &viewer);
    views::html(StatusCode::OK, views::pages::contact(&chrome))
}
