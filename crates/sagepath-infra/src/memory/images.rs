//! In-memory image bucket.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use sagepath_core::domain::{ImageUpload, Session};
use sagepath_core::error::StorageError;
use sagepath_core::ports::ImageStore;

const DEFAULT_BASE_URL: &str = "memory://images";

/// Stores uploaded bytes keyed by their public URL.
pub struct InMemoryImageStore {
    base_url: String,
    objects: RwLock<HashMap<String, Vec<u8>>>,
    fail_uploads: AtomicBool,
    fail_removes: AtomicBool,
}

impl InMemoryImageStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: RwLock::new(HashMap::new()),
            fail_uploads: AtomicBool::new(false),
            fail_removes: AtomicBool::new(false),
        }
    }

    pub fn fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_removes(&self, fail: bool) {
        self.fail_removes.store(fail, Ordering::SeqCst);
    }

    pub async fn contains(&self, url: &str) -> bool {
        self.objects.read().await.contains_key(url)
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryImageStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn upload(
        &self,
        _session: &Session,
        object_name: &str,
        image: &ImageUpload,
    ) -> Result<String, StorageError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StorageError::Upload("bucket unavailable".to_string()));
        }

        let url = format!("{}/{}", self.base_url, object_name);
        let mut objects = self.objects.write().await;
        if objects.contains_key(&url) {
            return Err(StorageError::Upload(format!(
                "object already exists: {object_name}"
            )));
        }
        objects.insert(url.clone(), image.bytes.clone());
        Ok(url)
    }

    async fn remove(&self, _session: &Session, public_url: &str) -> Result<(), StorageError> {
        if self.fail_removes.load(Ordering::SeqCst) {
            return Err(StorageError::Remove("bucket unavailable".to_string()));
        }
        if !public_url.starts_with(&self.base_url) {
            return Err(StorageError::UnknownUrl(public_url.to_string()));
        }

        // Removing a missing object succeeds, as remote buckets do.
        self.objects.write().await.remove(public_url);
        Ok(())
    }
}
