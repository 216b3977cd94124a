use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostWrite, Session};
use crate::error::RepoError;

/// Remote `posts` table.
///
/// Reads are anonymous; writes take the admin [`Session`] whose access token
/// authorizes them.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Posts ordered by creation time, newest first, optionally capped.
    async fn list_recent(&self, limit: Option<usize>) -> Result<Vec<Post>, RepoError>;

    /// The single post carrying `slug`. `Ok(None)` when no row or more than
    /// one row matches.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    async fn insert(&self, session: &Session, post: PostWrite) -> Result<Post, RepoError>;

    async fn update(&self, session: &Session, id: Uuid, post: PostWrite)
    -> Result<Post, RepoError>;

    async fn delete(&self, session: &Session, id: Uuid) -> Result<(), RepoError>;
}
