//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Public site identity shown in layouts and used for absolute URLs.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub url: String,
    pub booking_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Maraam Haque Therapy".to_string(),
            url: "https://maaraamhaque.com".to_string(),
            booking_url: "https://healingpaththerapy.janeapp.com".to_string(),
        }
    }
}

/// Remote backend endpoint and credential.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub bucket: String,
}

/// Session cookie settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: Option<String>,
    /// Lifetime used when the auth service reports no expiry.
    pub ttl: Duration,
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl: Duration::from_secs(3600),
            cookie_secure: false,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub site: SiteConfig,
    pub backend: BackendConfig,
    pub session: SessionConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| var(key).ok_or(ConfigError::Missing(key));

        let backend = BackendConfig {
            url: required("SUPABASE_URL")?,
            anon_key: required("SUPABASE_ANON_KEY")?,
            bucket: var("SUPABASE_BUCKET").unwrap_or_else(|| "blog-images".to_string()),
        };

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            name: var("SITE_NAME").unwrap_or(defaults.name),
            url: var("SITE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.url),
            booking_url: var("BOOKING_URL").unwrap_or(defaults.booking_url),
        };

        let ttl_hours: u64 = var("SESSION_TTL_HOURS")
            .and_then(|s| s.parse().ok())
            .filter(|h| *h > 0)
            .unwrap_or(1);
        let session = SessionConfig {
            secret: var("SESSION_SECRET"),
            ttl: Duration::from_secs(ttl_hours * 3600),
            cookie_secure: var("COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            site,
            backend,
            session,
        })
    }
}
