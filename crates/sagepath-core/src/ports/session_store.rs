use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DeleteFlow, Session};

/// Everything the server keeps for one signed-in browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session: Session,
    #[serde(default)]
    pub delete_flow: DeleteFlow,
}

impl SessionRecord {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            delete_flow: DeleteFlow::Idle,
        }
    }
}

/// Server-side session storage keyed by an opaque session id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The live record for `id`; expired records are treated as absent.
    async fn get(&self, id: Uuid) -> Option<SessionRecord>;

    /// Insert or replace a record with a time-to-live.
    async fn put(
        &self,
        id: Uuid,
        record: SessionRecord,
        ttl: Duration,
    ) -> Result<(), SessionStoreError>;

    /// Replace the record's delete flow, keeping its expiry.
    async fn set_delete_flow(&self, id: Uuid, flow: DeleteFlow) -> Result<(), SessionStoreError>;

    async fn remove(&self, id: Uuid) -> Result<(), SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found")]
    NotFound,

    #[error("Session store failed: {0}")]
    Operation(String),
}
