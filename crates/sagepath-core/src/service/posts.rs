//! Post lifecycle: listing, saving with an optional image, deleting.
//!
//! The post record is the source of truth. Image blobs are handled
//! best-effort around the record write: a new blob is uploaded before the
//! record points at it and an old blob is removed only after the record no
//! longer does. Blob failures are logged and never fail the operation.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{ImageUpload, Post, PostDraft, Session, validate_image, validate_post};
use crate::error::{RepoError, ServiceError};
use crate::ports::{ImageStore, PostRepository};

/// Number of posts shown on the home page.
pub const HOME_POST_LIMIT: usize = 3;

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    images: Arc<dyn ImageStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { posts, images }
    }

    /// Every post, newest first.
    pub async fn all(&self) -> Result<Vec<Post>, RepoError> {
        self.posts.list_recent(None).await
    }

    /// The newest posts for the home page.
    pub async fn latest(&self) -> Result<Vec<Post>, RepoError> {
        self.posts.list_recent(Some(HOME_POST_LIMIT)).await
    }

    pub async fn by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        self.posts.find_by_slug(slug).await
    }

    pub async fn by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        self.posts.find_by_id(id).await
    }

    /// Create a post (`existing == None`) or update `existing`.
    ///
    /// Validation failures return before any remote call. A failed upload
    /// keeps the previous image URL. A failed record write aborts; a blob
    /// uploaded for it is left orphaned and logged.
    pub async fn save(
        &self,
        session: &Session,
        existing: Option<&Post>,
        draft: PostDraft,
        image: Option<ImageUpload>,
    ) -> Result<Post, ServiceError> {
        validate_post(&draft)?;
        if let Some(image) = &image {
            validate_image(image)?;
        }

        let previous_url = existing.and_then(|p| p.image_url.clone());
        let mut image_url = previous_url.clone();
        let mut uploaded_url = None;

        if let Some(image) = image {
            let target_id = existing.map(|p| p.id).unwrap_or_else(Uuid::new_v4);
            let object_name = image.object_name(target_id, Utc::now());
            match self.images.upload(session, &object_name, &image).await {
                Ok(url) => {
                    tracing::debug!(object = %object_name, "Uploaded post image");
                    image_url = Some(url.clone());
                    uploaded_url = Some(url);
                }
                Err(e) => {
                    tracing::warn!(
                        object = %object_name,
                        error = %e,
                        "Image upload failed, saving post without a new image"
                    );
                }
            }
        }

        let write = draft.into_write(image_url, session.user_id);
        let result = match existing {
            Some(post) => self.posts.update(session, post.id, write).await,
            None => self.posts.insert(session, write).await,
        };

        let saved = match result {
            Ok(post) => post,
            Err(e) => {
                if let Some(url) = &uploaded_url {
                    tracing::warn!(
                        image_url = %url,
                        error = %e,
                        "Post write failed, uploaded image is orphaned"
                    );
                }
                return Err(e.into());
            }
        };

        if let (Some(new_url), Some(old_url)) = (&uploaded_url, &previous_url) {
            if new_url != old_url {
                if let Err(e) = self.images.remove(session, old_url).await {
                    tracing::warn!(
                        post_id = %saved.id,
                        image_url = %old_url,
                        error = %e,
                        "Failed to delete replaced image, post was updated"
                    );
                }
            }
        }

        tracing::info!(post_id = %saved.id, slug = %saved.slug, "Post saved");
        Ok(saved)
    }

    /// Delete a post and its image. The image goes first and its failure is
    /// only logged; a failed record delete is returned.
    pub async fn delete(&self, session: &Session, post: &Post) -> Result<(), RepoError> {
        if let Some(url) = &post.image_url {
            if let Err(e) = self.images.remove(session, url).await {
                tracing::warn!(
                    post_id = %post.id,
                    image_url = %url,
                    error = %e,
                    "Failed to delete image, continuing with post deletion"
                );
            }
        }

        self.posts.delete(session, post.id).await?;
        tracing::info!(post_id = %post.id, "Post deleted");
        Ok(())
    }
}
