//! GoTrue password sign-in and sign-out.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use sagepath_core::domain::Session;
use sagepath_core::ports::{AuthError, AuthService};

use super::{SupabaseClient, error_text};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: TokenUser,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

/// GoTrue has used several error shapes across versions.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
    }
}

impl TokenResponse {
    fn expires_at(&self, now: DateTime<Utc>, fallback: Duration) -> DateTime<Utc> {
        if let Some(at) = self.expires_at.and_then(|ts| DateTime::from_timestamp(ts, 0)) {
            return at;
        }
        now + self.expires_in.map(Duration::seconds).unwrap_or(fallback)
    }

    fn into_session(self, fallback_email: &str, fallback_lifetime: Duration) -> Session {
        let expires_at = self.expires_at(Utc::now(), fallback_lifetime);
        Session {
            user_id: self.user.id,
            email: self
                .user
                .email
                .unwrap_or_else(|| fallback_email.to_string()),
            access_token: self.access_token,
            expires_at,
        }
    }
}

/// Password auth against the project's GoTrue endpoint.
pub struct SupabaseAuthService {
    client: SupabaseClient,
    fallback_lifetime: Duration,
}

impl SupabaseAuthService {
    /// `fallback_lifetime` applies when a token response carries no expiry.
    pub fn new(client: SupabaseClient, fallback_lifetime: Duration) -> Self {
        Self {
            client,
            fallback_lifetime,
        }
    }
}

#[async_trait]
impl AuthService for SupabaseAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .client
            .request(Method::POST, "auth/v1/token", None)
            .query(&[("grant_type", "password")])
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let token: TokenResponse = response
                .json()
                .await
                .map_err(|e| AuthError::Unavailable(format!("Unexpected token response: {e}")))?;
            return Ok(token.into_session(email, self.fallback_lifetime));
        }

        if status.is_client_error() {
            let message = response
                .json::<ErrorBody>()
                .await
                .unwrap_or_default()
                .into_message()
                .unwrap_or_else(|| "Login failed. Please check your credentials.".to_string());
            return Err(AuthError::Rejected(message));
        }

        Err(AuthError::Unavailable(error_text(response).await))
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        let response = self
            .client
            .request(Method::POST, "auth/v1/logout", Some(&session.access_token))
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            // Already expired or revoked remotely.
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(()),
            _ => Err(AuthError::Unavailable(error_text(response).await)),
        }
    }
}
