//! Blog listing and post pages.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::auth::MaybeSession;
use crate::middleware::error::see_other;
use crate::state::AppState;
use crate::views;

use super::chrome;

/// GET /blog
pub async fn index(
    state: web::Data<AppState>,
    req: HttpRequest,
    viewer: MaybeSession,
) -> HttpResponse {
    let posts = match state.posts.all().await {
        Ok(posts) => Some(posts),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load blog posts");
            None
        }
    };
    let chrome = chrome(&state, &req, &viewer);
    views::html(StatusCode::OK, views::blog::index(&chrome, posts.as_deref()))
}

/// GET /blog/{slug}
///
/// A missing post and a failed lookup both send the reader back to the
/// listing.
pub async fn show(
    state: web::Data<AppState>,
    req: HttpRequest,
    viewer: MaybeSession,
    path: web::Path<String>,
) -> HttpResponse {
    let slug = path.into_inner();
    match state.posts.by_slug(&slug).await {
        Ok(Some(post)) => {
            let chrome = chrome(&state, &req, &viewer);
            views::html(StatusCode::OK, views::blog::post(&chrome, &post))
        }
        Ok(None) => {
            tracing::debug!(slug = %slug, "Post not found");
            see_other("/blog")
        }
        Err(e) => {
            tracing::error!(slug = %slug, error = %e, "Failed to load post");
            see_other("/blog")
        }
    }
}
