//! Session extractors for admin routes.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;

use crate::middleware::error::AppError;
use crate::session::ActiveSession;
use crate::state::AppState;

/// Signed-in admin. Extracting it from a request without a live session
/// fails with [`AppError::LoginRequired`], which redirects to the login page.
///
/// ```ignore
/// async fn dashboard(admin: AdminSession) -> impl Responder {
///     format!("Signed in as {}", admin.session.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession(pub ActiveSession);

impl std::ops::Deref for AdminSession {
    type Target = ActiveSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

async fn lookup(req: HttpRequest) -> Result<Option<ActiveSession>, AppError> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState not found in app data");
        AppError::Internal("Server configuration error".to_string())
    })?;
    Ok(state.sessions.current(&req).await)
}

impl FromRequest for AdminSession {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            lookup(req)
                .await?
                .map(AdminSession)
                .ok_or(AppError::LoginRequired)
        })
    }
}

/// Optional session extractor - doesn't fail if not signed in.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<ActiveSession>);

impl MaybeSession {
    pub fn is_signed_in(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for MaybeSession {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { lookup(req).await.map(MaybeSession) })
    }
}
