//! Data Transfer Objects - form and JSON payloads.

use serde::{Deserialize, Serialize};

/// Admin login form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Delete confirmation modal form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteConfirmRequest {
    #[serde(default)]
    pub confirmation: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok(version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            version: version.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
