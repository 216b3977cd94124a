//! Dashboard and the two-step delete flow.
//!
//! The flow lives in the session record: a first POST to
//! `/delete/{id}` arms the row, a second opens the modal, and only a
//! confirmation carrying the phrase moves it to `Deleting` and calls the
//! store.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

use sagepath_core::domain::{CONFIRM_PHRASE, DeleteFlow, FlowError};
use sagepath_shared::DeleteConfirmRequest;

use super::DASHBOARD_PATH;
use crate::middleware::auth::AdminSession;
use crate::middleware::error::{AppError, AppResult, see_other};
use crate::session::ActiveSession;
use crate::state::AppState;
use crate::views;

async fn render(
    state: &AppState,
    admin: &AdminSession,
    flow: &DeleteFlow,
    notice: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let posts = match state.posts.all().await {
        Ok(posts) => Some(posts),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load posts for dashboard");
            None
        }
    };
    views::html(
        status,
        views::admin::dashboard(
            &state.site,
            &admin.session.email,
            posts.as_deref(),
            flow,
            notice,
        ),
    )
}

/// GET /me/admin/dashboard
pub async fn show(state: web::Data<AppState>, admin: AdminSession) -> HttpResponse {
    render(&state, &admin, &admin.delete_flow, None, StatusCode::OK).await
}

/// POST /me/admin/delete/{post_id}
pub async fn click_delete(
    state: web::Data<AppState>,
    admin: AdminSession,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let Some(post) = state.posts.by_id(post_id).await? else {
        tracing::debug!(post_id = %post_id, "Delete clicked for a missing post");
        return Ok(see_other(DASHBOARD_PATH));
    };

    let mut flow = admin.delete_flow.clone();
    match flow.click(post.id, &post.title) {
        Ok(()) => state.sessions.save_flow(admin.id, flow).await?,
        Err(e) => tracing::debug!(post_id = %post_id, error = %e, "Delete click ignored"),
    }
    Ok(see_other(DASHBOARD_PATH))
}

/// POST /me/admin/delete/cancel
pub async fn cancel_delete(
    state: web::Data<AppState>,
    admin: AdminSession,
) -> AppResult<HttpResponse> {
    let mut flow = admin.delete_flow.clone();
    match flow.cancel() {
        Ok(()) => state.sessions.save_flow(admin.id, flow).await?,
        Err(e) => tracing::debug!(error = %e, "Cancel ignored"),
    }
    Ok(see_other(DASHBOARD_PATH))
}

/// POST /me/admin/delete/confirm
///
/// Once the flow is in `Deleting` the delete runs on its own task, so a
/// client that disconnects mid-request cannot leave the flow stuck.
pub async fn confirm_delete(
    state: web::Data<AppState>,
    admin: AdminSession,
    body: web::Form<DeleteConfirmRequest>,
) -> AppResult<HttpResponse> {
    let title = match &admin.delete_flow {
        DeleteFlow::ModalOpen { title, .. } => title.clone(),
        _ => String::new(),
    };

    let mut flow = admin.delete_flow.clone();
    let post_id = match flow.confirm(&body.confirmation) {
        Ok(post_id) => post_id,
        Err(FlowError::PhraseMismatch) => {
            let notice = format!("Type '{CONFIRM_PHRASE}' to confirm");
            return Ok(render(
                &state,
                &admin,
                &admin.delete_flow,
                Some(&notice),
                StatusCode::UNPROCESSABLE_ENTITY,
            )
            .await);
        }
        Err(e) => {
            tracing::debug!(error = %e, "Confirmation ignored");
            return Ok(see_other(DASHBOARD_PATH));
        }
    };
    state.sessions.save_flow(admin.id, flow.clone()).await?;

    let task = actix_web::rt::spawn(run_delete(
        state.clone(),
        admin.0.clone(),
        post_id,
        title,
        flow,
    ));
    match task.await {
        Ok(result) => result?,
        Err(e) => {
            return Err(AppError::Internal(format!("Delete task failed: {e}")));
        }
    }
    Ok(see_other(DASHBOARD_PATH))
}

/// Delete the post and record the outcome in the session's flow.
///
/// The image goes first and its failure is only logged; a failed record
/// delete reopens the modal with the error.
async fn run_delete(
    state: web::Data<AppState>,
    admin: ActiveSession,
    post_id: Uuid,
    title: String,
    mut flow: DeleteFlow,
) -> Result<(), AppError> {
    // Re-read so the image URL is current.
    let outcome = match state.posts.by_id(post_id).await {
        Ok(Some(post)) => match state.posts.delete(&admin.session, &post).await {
            Ok(()) => {
                tracing::info!(post_id = %post_id, "Post deleted");
                Ok(())
            }
            Err(e) => {
                tracing::error!(post_id = %post_id, error = %e, "Failed to delete post");
                Err("Failed to delete post from database".to_string())
            }
        },
        Ok(None) => {
            tracing::info!(post_id = %post_id, "Post already gone");
            Ok(())
        }
        Err(e) => {
            tracing::error!(post_id = %post_id, error = %e, "Failed to load post for deletion");
            Err("An unexpected error occurred while deleting the post".to_string())
        }
    };

    if let Err(e) = flow.finish(&title, outcome) {
        tracing::warn!(error = %e, "Delete flow out of step");
    }
    state.sessions.save_flow(admin.id, flow).await
}
