//! In-memory session store. Sessions are lost on process restart, which
//! signs every admin out.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use sagepath_core::domain::DeleteFlow;
use sagepath_core::ports::{SessionRecord, SessionStore, SessionStoreError};

struct Entry {
    record: SessionRecord,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Session store using a HashMap behind an async RwLock.
pub struct InMemorySessionStore {
    store: RwLock<HashMap<Uuid, Entry>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.values().filter(|e| !e.is_expired()).count()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: Uuid) -> Option<SessionRecord> {
        let store = self.store.read().await;
        let entry = store.get(&id)?;

        if entry.is_expired() {
            drop(store);
            let mut store = self.store.write().await;
            store.remove(&id);
            return None;
        }

        Some(entry.record.clone())
    }

    async fn put(
        &self,
        id: Uuid,
        record: SessionRecord,
        ttl: Duration,
    ) -> Result<(), SessionStoreError> {
        let mut store = self.store.write().await;
        store.retain(|_, entry| !entry.is_expired());
        store.insert(
            id,
            Entry {
                record,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn set_delete_flow(&self, id: Uuid, flow: DeleteFlow) -> Result<(), SessionStoreError> {
        let mut store = self.store.write().await;
        match store.get_mut(&id) {
            Some(entry) if !entry.is_expired() => {
                entry.record.delete_flow = flow;
                Ok(())
            }
            Some(_) => {
                store.remove(&id);
                Err(SessionStoreError::NotFound)
            }
            None => Err(SessionStoreError::NotFound),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<(), SessionStoreError> {
        let mut store = self.store.write().await;
        store.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sagepath_core::domain::Session;

    fn record() -> SessionRecord {
        SessionRecord::new(Session {
            user_id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            access_token: "token".to_string(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
        })
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let store = InMemorySessionStore::new();
        let id = Uuid::new_v4();
        let record = record();
        store.put(id, record.clone(), Duration::from_secs(60)).await.unwrap();
        assert_eq!(store.get(id).await, Some(record));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemorySessionStore::new();
        let id = Uuid::new_v4();
        store.put(id, record(), Duration::from_secs(60)).await.unwrap();
        store.remove(id).await.unwrap();
        assert_eq!(store.get(id).await, None);
    }

    #[tokio::test]
    async fn test_expired_session_is_absent() {
        let store = InMemorySessionStore::new();
        let id = Uuid::new_v4();
        store.put(id, record(), Duration::from_millis(1)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(store.get(id).await, None);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_set_delete_flow() {
        let store = InMemorySessionStore::new();
        let id = Uuid::new_v4();
        store.put(id, record(), Duration::from_secs(60)).await.unwrap();

        let flow = DeleteFlow::Armed {
            post_id: Uuid::new_v4(),
        };
        store.set_delete_flow(id, flow.clone()).await.unwrap();
        assert_eq!(store.get(id).await.unwrap().delete_flow, flow);

        let missing = store.set_delete_flow(Uuid::new_v4(), DeleteFlow::Idle).await;
        assert!(matches!(missing, Err(SessionStoreError::NotFound)));
    }
}
