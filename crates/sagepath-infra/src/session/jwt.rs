//! JWT session cookie implementation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sagepath_core::ports::{AuthError, SessionClaims, SessionTokenService};

/// Development fallback; the server warns when it is in use.
pub const DEFAULT_SECRET: &str = "change-me-in-production";

/// Session cookie signing configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            issuer: "sagepath-site".to_string(),
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user_id
    sid: String, // server-side session id
    email: String,
    exp: i64,
    iat: i64,
    iss: String,
}

/// HMAC-signed JWT session cookies.
pub struct JwtSessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtSessionTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.config.secret == DEFAULT_SECRET
    }
}

fn parse_uuid(raw: &str) -> Result<Uuid, AuthError> {
    Uuid::parse_str(raw).map_err(|e| AuthError::InvalidToken(e.to_string()))
}

impl SessionTokenService for JwtSessionTokenService {
    fn issue(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        let claims = Claims {
            sub: claims.user_id.to_string(),
            sid: claims.session_id.to_string(),
            email: claims.email.clone(),
            exp: claims.expires_at.timestamp(),
            iat: Utc::now().timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        let claims = token_data.claims;
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AuthError::InvalidToken("expiry out of range".to_string()))?;

        Ok(SessionClaims {
            session_id: parse_uuid(&claims.sid)?,
            user_id: parse_uuid(&claims.sub)?,
            email: claims.email,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            issuer: "test-issuer".to_string(),
        }
    }

    fn claims(expires_in: Duration) -> SessionClaims {
        SessionClaims {
            session_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            expires_at: DateTime::from_timestamp((Utc::now() + expires_in).timestamp(), 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let service = JwtSessionTokenService::new(test_config());
        let original = claims(Duration::hours(1));

        let token = service.issue(&original).unwrap();
        let verified = service.verify(&token).unwrap();

        assert_eq!(verified, original);
    }

    #[test]
    fn test_verify_invalid_token() {
        let service = JwtSessionTokenService::new(test_config());

        let result = service.verify("invalid-token");

        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_verify_expired_token() {
        let service = JwtSessionTokenService::new(test_config());
        let token = service.issue(&claims(Duration::hours(-2))).unwrap();

        assert!(matches!(
            service.verify(&token).unwrap_err(),
            AuthError::TokenExpired
        ));
    }

    #[test]
    fn test_verify_wrong_issuer_token() {
        let service1 = JwtSessionTokenService::new(JwtConfig {
            secret: "same-secret".to_string(),
            issuer: "issuer1".to_string(),
        });
        let service2 = JwtSessionTokenService::new(JwtConfig {
            secret: "same-secret".to_string(),
            issuer: "issuer2".to_string(),
        });

        let token = service1.issue(&claims(Duration::hours(1))).unwrap();

        assert!(service2.verify(&token).is_err());
    }

    #[test]
    fn test_default_secret_detection() {
        assert!(JwtSessionTokenService::new(JwtConfig::default()).uses_default_secret());
        assert!(!JwtSessionTokenService::new(test_config()).uses_default_secret());
    }
}
