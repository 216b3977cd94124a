//! HTTP handlers and route configuration.

mod admin;
mod blog;
mod health;
mod pages;

#[cfg(test)]
mod tests;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::auth::MaybeSession;
use crate::state::AppState;
use crate::views::{self, Chrome};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public pages
        .route("/", web::get().to(pages::home))
        .route("/about", web::get().to(pages::about))
        .route("/services", web::get().to(pages::services))
        .route("/faq", web::get().to(pages::faq))
        .route("/contact", web::get().to(pages::contact))
        .route("/blog", web::get().to(blog::index))
        .route("/blog/{slug}", web::get().to(blog::show))
        .route("/health", web::get().to(health::health_check))
        // Admin area
        .service(
            web::scope("/me/admin")
                .route("", web::get().to(admin::login::form))
                .route("", web::post().to(admin::login::submit))
                .route("/logout", web::post().to(admin::login::logout))
                .route("/dashboard", web::get().to(admin::dashboard::show))
                .route("/create", web::get().to(admin::posts::new_form))
                .route("/create", web::post().to(admin::posts::create))
                .route("/edit/{post_id}", web::get().to(admin::posts::edit_form))
                .route("/edit/{post_id}", web::post().to(admin::posts::update))
                // Fixed paths before the id pattern
                .route("/delete/confirm", web::post().to(admin::dashboard::confirm_delete))
                .route("/delete/cancel", web::post().to(admin::dashboard::cancel_delete))
                .route("/delete/{post_id}", web::post().to(admin::dashboard::click_delete)),
        );
}

/// Fallback for unmatched routes.
pub async fn not_found(
    state: web::Data<AppState>,
    req: HttpRequest,
    viewer: MaybeSession,
) -> HttpResponse {
    let chrome = chrome(&state, &req, &viewer);
    views::html(StatusCode::NOT_FOUND, views::pages::not_found(&chrome))
}

fn chrome<'a>(state: &'a AppState, req: &'a HttpRequest, viewer: &MaybeSession) -> Chrome<'a> {
    Chrome {
        site: &state.site,
        path: req.path(),
        signed_in: viewer.is_signed_in(),
    }
}
