//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::Duration;

use sagepath_core::PostService;
use sagepath_core::ports::{AuthService, SessionStore, SessionTokenService};
use sagepath_infra::{
    InMemorySessionStore, JwtConfig, JwtSessionTokenService, SupabaseAuthService, SupabaseClient,
    SupabaseConfig, SupabaseImageStore, SupabasePostRepository,
};

use crate::config::{AppConfig, SiteConfig};
use crate::session::SessionManager;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub auth: Arc<dyn AuthService>,
    pub sessions: SessionManager,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(
        posts: PostService,
        auth: Arc<dyn AuthService>,
        sessions: SessionManager,
        site: SiteConfig,
    ) -> Self {
        Self {
            posts,
            auth,
            sessions,
            site: Arc::new(site),
        }
    }

    /// Wire the remote backend adapters described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let mut backend = SupabaseConfig::new(&config.backend.url, &config.backend.anon_key);
        backend.bucket = config.backend.bucket.clone();
        let client = SupabaseClient::new(backend)?;

        let posts = PostService::new(
            Arc::new(SupabasePostRepository::new(client.clone())),
            Arc::new(SupabaseImageStore::new(client.clone())),
        );

        let fallback = Duration::from_std(config.session.ttl).unwrap_or(Duration::hours(1));
        let auth: Arc<dyn AuthService> = Arc::new(SupabaseAuthService::new(client, fallback));

        let jwt = match &config.session.secret {
            Some(secret) => JwtConfig {
                secret: secret.clone(),
                ..JwtConfig::default()
            },
            None => JwtConfig::default(),
        };
        let tokens = JwtSessionTokenService::new(jwt);
        if tokens.uses_default_secret() {
            tracing::warn!("SESSION_SECRET not set. Using the development signing key.");
        }

        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let tokens: Arc<dyn SessionTokenService> = Arc::new(tokens);
        let sessions = SessionManager::new(
            store,
            tokens,
            config.session.ttl,
            config.session.cookie_secure,
        );

        tracing::info!("Application state initialized");
        Ok(Self::new(posts, auth, sessions, config.site.clone()))
    }
}
