//! Create and edit forms.

use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

use sagepath_core::ServiceError;
use sagepath_core::domain::Post;

use super::DASHBOARD_PATH;
use super::form::{PostForm, read_post_form};
use crate::middleware::auth::AdminSession;
use crate::middleware::error::{AppError, AppResult, see_other};
use crate::state::AppState;
use crate::views;
use crate::views::admin::PostFormView;

/// GET /me/admin/create
pub async fn new_form(state: web::Data<AppState>, admin: AdminSession) -> HttpResponse {
    let view = PostFormView {
        editing: None,
        title: "",
        content: "",
        errors: None,
        error: None,
        preview: false,
    };
    views::html(
        StatusCode::OK,
        views::admin::post_form(&state.site, &admin.session.email, &view),
    )
}

/// GET /me/admin/edit/{post_id}
pub async fn edit_form(
    state: web::Data<AppState>,
    admin: AdminSession,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = load(&state, path.into_inner()).await?;
    let view = PostFormView {
        editing: Some(&post),
        title: &post.title,
        content: &post.content,
        errors: None,
        error: None,
        preview: false,
    };
    Ok(views::html(
        StatusCode::OK,
        views::admin::post_form(&state.site, &admin.session.email, &view),
    ))
}

/// POST /me/admin/create
pub async fn create(
    state: web::Data<AppState>,
    admin: AdminSession,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let form = read_post_form(payload).await?;
    save(&state, &admin, None, form).await
}

/// POST /me/admin/edit/{post_id}
pub async fn update(
    state: web::Data<AppState>,
    admin: AdminSession,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let post = load(&state, path.into_inner()).await?;
    let form = read_post_form(payload).await?;
    save(&state, &admin, Some(&post), form).await
}

async fn load(state: &AppState, id: Uuid) -> Result<Post, AppError> {
    state.posts.by_id(id).await?.ok_or(AppError::NotFound)
}

/// Run the save and either redirect to the dashboard or re-render the form
/// with the submitted values. A preview submission writes nothing.
async fn save(
    state: &AppState,
    admin: &AdminSession,
    existing: Option<&Post>,
    form: PostForm,
) -> AppResult<HttpResponse> {
    if form.preview {
        let view = PostFormView {
            editing: existing,
            title: &form.draft.title,
            content: &form.draft.content,
            errors: None,
            error: None,
            preview: true,
        };
        return Ok(views::html(
            StatusCode::OK,
            views::admin::post_form(&state.site, &admin.session.email, &view),
        ));
    }

    let draft = form.draft.clone();
    let result = state
        .posts
        .save(&admin.session, existing, form.draft, form.image)
        .await;

    let (status, errors, error) = match result {
        Ok(_) => return Ok(see_other(DASHBOARD_PATH)),
        Err(ServiceError::Validation(errors)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Some(errors), None)
        }
        Err(ServiceError::Repo(e)) => {
            tracing::error!(error = %e, "Failed to save post");
            let message = match existing {
                Some(_) => "Failed to update post",
                None => "Failed to create post",
            };
            (StatusCode::INTERNAL_SERVER_ERROR, None, Some(message))
        }
    };

    let view = PostFormView {
        editing: existing,
        title: &draft.title,
        content: &draft.content,
        errors: errors.as_ref(),
        error,
        preview: false,
    };
    Ok(views::html(
        status,
        views::admin::post_form(&state.site, &admin.session.email, &view),
    ))
}
