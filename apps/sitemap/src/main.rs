//! Sitemap generator.
//!
//! Reads every post from the backend and writes `sitemap.xml` covering the
//! static pages and one entry per post.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use sagepath_core::ports::PostRepository;
use sagepath_core::sitemap::{self, STATIC_PAGES};
use sagepath_infra::{SupabaseClient, SupabaseConfig, SupabasePostRepository};

const DEFAULT_SITE_URL: &str = "https://maaraamhaque.com";
const DEFAULT_OUT: &str = "public/sitemap.xml";

fn required(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{key} must be set"))
}

async fn run() -> Result<()> {
    let backend = SupabaseConfig::new(
        required("SUPABASE_URL")?,
        required("SUPABASE_ANON_KEY")?,
    );
    let site_url = std::env::var("SITE_URL")
        .map(|u| u.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
    let out = std::env::var("SITEMAP_OUT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUT));

    let client = SupabaseClient::new(backend).context("building HTTP client")?;
    let posts = SupabasePostRepository::new(client)
        .list_recent(None)
        .await
        .context("fetching posts")?;

    let xml = sitemap::render(&site_url, Utc::now().date_naive(), &posts)
        .context("rendering sitemap")?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    tokio::fs::write(&out, xml)
        .await
        .with_context(|| format!("writing {}", out.display()))?;

    tracing::info!(
        path = %out.display(),
        static_pages = STATIC_PAGES.len(),
        posts = posts.len(),
        total = STATIC_PAGES.len() + posts.len(),
        "Sitemap written"
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    if let Err(e) = run().await {
        tracing::error!(error = format!("{e:#}"), "Sitemap generation failed");
        std::process::exit(1);
    }
}
