//! Supabase-compatible REST clients: PostgREST table access, object storage
//! and GoTrue password auth.

mod auth;
mod posts;
mod storage;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};

pub use auth::SupabaseAuthService;
pub use posts::SupabasePostRepository;
pub use storage::{SupabaseImageStore, object_name_from_url};

/// Default storage bucket for post images.
pub const DEFAULT_BUCKET: &str = "blog-images";

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project endpoint, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Public (anon) API key sent with every request.
    pub anon_key: String,
    /// Bucket holding post images.
    pub bucket: String,
    pub timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            bucket: DEFAULT_BUCKET.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Shared HTTP client carrying the project endpoint and API key.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    config: Arc<SupabaseConfig>,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        tracing::info!(endpoint = %config.url, bucket = %config.bucket, "Supabase client initialized");

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// Absolute URL for a path under the project endpoint.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Request with the API key and a bearer token: the user's access token
    /// when acting for a session, the anon key otherwise.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&str>,
    ) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token.unwrap_or(&self.config.anon_key))
    }
}

/// Best-effort body text for error messages.
pub(crate) async fn error_text(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {body}")
    }
}
