//! Admin sessions: a signed cookie naming a record in the session store.
//!
//! A request is signed in only when the cookie verifies and the store still
//! holds the session it names. Sign-out removes the record, so a copied
//! cookie stops working even before it expires.

use std::sync::Arc;
use std::time::Duration;

use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite, time};
use uuid::Uuid;

use sagepath_core::domain::{DeleteFlow, Session};
use sagepath_core::ports::{
    SessionClaims, SessionRecord, SessionStore, SessionStoreError, SessionTokenService,
};

use crate::middleware::error::AppError;

pub const SESSION_COOKIE: &str = "sagepath_session";

/// A verified session attached to the current request.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub id: Uuid,
    pub session: Session,
    pub delete_flow: DeleteFlow,
}

#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    tokens: Arc<dyn SessionTokenService>,
    fallback_ttl: Duration,
    cookie_secure: bool,
}

impl SessionManager {
    pub fn new(
        store: Arc<dyn SessionStore>,
        tokens: Arc<dyn SessionTokenService>,
        fallback_ttl: Duration,
        cookie_secure: bool,
    ) -> Self {
        Self {
            store,
            tokens,
            fallback_ttl,
            cookie_secure,
        }
    }

    /// Store a freshly signed-in session and build its cookie.
    pub async fn establish(&self, session: Session) -> Result<Cookie<'static>, AppError> {
        let ttl = match session.remaining() {
            d if d.is_zero() => self.fallback_ttl,
            d => d,
        };
        let id = Uuid::new_v4();
        let claims = SessionClaims {
            session_id: id,
            user_id: session.user_id,
            email: session.email.clone(),
            expires_at: session.expires_at,
        };

        let token = self
            .tokens
            .issue(&claims)
            .map_err(|e| AppError::Internal(format!("Failed to sign session: {e}")))?;
        self.store
            .put(id, SessionRecord::new(session), ttl)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        tracing::info!(session_id = %id, email = %claims.email, "Admin signed in");

        Ok(Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.cookie_secure)
            .max_age(time::Duration::seconds(ttl.as_secs() as i64))
            .finish())
    }

    /// The session named by the request's cookie, if it is still live.
    pub async fn current(&self, req: &HttpRequest) -> Option<ActiveSession> {
        let cookie = req.cookie(SESSION_COOKIE)?;
        let claims = match self.tokens.verify(cookie.value()) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring session cookie");
                return None;
            }
        };

        let record = self.store.get(claims.session_id).await?;
        if record.session.user_id != claims.user_id || record.session.is_expired() {
            return None;
        }

        Some(ActiveSession {
            id: claims.session_id,
            session: record.session,
            delete_flow: record.delete_flow,
        })
    }

    pub async fn save_flow(&self, id: Uuid, flow: DeleteFlow) -> Result<(), AppError> {
        match self.store.set_delete_flow(id, flow).await {
            Ok(()) => Ok(()),
            Err(SessionStoreError::NotFound) => Err(AppError::LoginRequired),
            Err(e) => Err(AppError::Internal(e.to_string())),
        }
    }

    pub async fn destroy(&self, id: Uuid) {
        if let Err(e) = self.store.remove(id).await {
            tracing::warn!(session_id = %id, error = %e, "Failed to remove session");
        }
    }
}

/// Cookie that clears the session cookie in the browser.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
