//! Object storage for post images.

use async_trait::async_trait;
use reqwest::Method;

use sagepath_core::domain::{ImageUpload, Session};
use sagepath_core::error::StorageError;
use sagepath_core::ports::ImageStore;

use super::{SupabaseClient, error_text};

/// Object name inside `bucket` referenced by a public URL, if any.
pub fn object_name_from_url<'a>(url: &'a str, bucket: &str) -> Option<&'a str> {
    let marker = format!("/{bucket}/");
    let start = url.find(&marker)? + marker.len();
    let name = url[start..].split(['?', '#']).next()?;
    (!name.is_empty()).then_some(name)
}

/// Images stored in a public Supabase storage bucket.
pub struct SupabaseImageStore {
    client: SupabaseClient,
}

impl SupabaseImageStore {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    fn bucket(&self) -> &str {
        &self.client.config().bucket
    }

    pub fn public_url(&self, object_name: &str) -> String {
        self.client.endpoint(&format!(
            "storage/v1/object/public/{}/{}",
            self.bucket(),
            object_name
        ))
    }
}

#[async_trait]
impl ImageStore for SupabaseImageStore {
    async fn upload(
        &self,
        session: &Session,
        object_name: &str,
        image: &ImageUpload,
    ) -> Result<String, StorageError> {
        let content_type = image
            .content_type
            .as_deref()
            .unwrap_or("application/octet-stream");

        let response = self
            .client
            .request(
                Method::POST,
                &format!("storage/v1/object/{}/{}", self.bucket(), object_name),
                Some(&session.access_token),
            )
            .header("content-type", content_type)
            .header("x-upsert", "false")
            .body(image.bytes.clone())
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::Upload(error_text(response).await));
        }

        Ok(self.public_url(object_name))
    }

    async fn remove(&self, session: &Session, public_url: &str) -> Result<(), StorageError> {
        let object_name = object_name_from_url(public_url, self.bucket())
            .ok_or_else(|| StorageError::UnknownUrl(public_url.to_string()))?;

        let response = self
            .client
            .request(
                Method::DELETE,
                &format!("storage/v1/object/{}", self.bucket()),
                Some(&session.access_token),
            )
            .json(&serde_json::json!({ "prefixes": [object_name] }))
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::Remove(error_text(response).await));
        }

        tracing::debug!(object = %object_name, "Removed stored image");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supabase::SupabaseConfig;

    #[test]
    fn extracts_object_name_from_public_url() {
        let url = "https://demo.supabase.co/storage/v1/object/public/blog-images/abc-123.png";
        assert_eq!(object_name_from_url(url, "blog-images"), Some("abc-123.png"));
    }

    #[test]
    fn drops_query_string() {
        let url = "https://demo.supabase.co/storage/v1/object/public/blog-images/a.jpg?t=1";
        assert_eq!(object_name_from_url(url, "blog-images"), Some("a.jpg"));
    }

    #[test]
    fn rejects_foreign_urls() {
        assert_eq!(
            object_name_from_url("https://elsewhere.org/img/a.jpg", "blog-images"),
            None
        );
        assert_eq!(
            object_name_from_url("https://demo.supabase.co/blog-images/", "blog-images"),
            None
        );
    }

    #[test]
    fn public_url_round_trips_through_extraction() {
        let client =
            SupabaseClient::new(SupabaseConfig::new("https://demo.supabase.co", "key")).unwrap();
        let store = SupabaseImageStore::new(client);
        let url = store.public_url("post-1.webp");
        assert_eq!(
            url,
            "https://demo.supabase.co/storage/v1/object/public/blog-images/post-1.webp"
        );
        assert_eq!(object_name_from_url(&url, "blog-images"), Some("post-1.webp"));
    }
}
