use async_trait::async_trait;

use crate::domain::{ImageUpload, Session};
use crate::error::StorageError;

/// Remote blob storage for post images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store `image` under `object_name` and return its public URL.
    async fn upload(
        &self,
        session: &Session,
        object_name: &str,
        image: &ImageUpload,
    ) -> Result<String, StorageError>;

    /// Remove the object a public URL points at.
    async fn remove(&self, session: &Session, public_url: &str) -> Result<(), StorageError>;
}
