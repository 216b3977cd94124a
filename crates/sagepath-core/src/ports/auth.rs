//! Authentication ports: the remote credential service and the signed
//! session cookie.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::Session;

/// Remote auth service issuing sessions.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Revoke the session's access token remotely.
    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
}

/// Claims carried by the session cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionClaims {
    pub session_id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies the session cookie value.
pub trait SessionTokenService: Send + Sync {
    fn issue(&self, claims: &SessionClaims) -> Result<String, AuthError>;

    fn verify(&self, token: &str) -> Result<SessionClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The auth service refused the credentials; the message is shown to
    /// the user as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("Auth service unavailable: {0}")]
    Unavailable(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}
