//! Error handling middleware - HTML error pages and redirects.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};

use sagepath_core::error::RepoError;

use crate::session::removal_cookie;
use crate::views;

/// Path of the admin login page.
pub const LOGIN_PATH: &str = "/me/admin";

/// Application-level error type rendered as an HTML page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    /// No live admin session; answered with a redirect to the login page.
    #[error("Login required")]
    LoginRequired,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::LoginRequired => StatusCode::SEE_OTHER,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (title, message) = match self {
            AppError::LoginRequired => {
                return HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, LOGIN_PATH))
                    .cookie(removal_cookie())
                    .finish();
            }
            AppError::NotFound => (
                "Page Not Found",
                "The page you are looking for does not exist.".to_string(),
            ),
            AppError::BadRequest(detail) => ("Bad Request", detail.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    "Something Went Wrong",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        views::html(self.status_code(), views::error_page(title, &message))
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound,
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// 303 redirect, used after form posts and for unreachable content.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
