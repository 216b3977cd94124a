//! In-memory posts table.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use sagepath_core::domain::{Post, PostWrite, Session};
use sagepath_core::error::RepoError;
use sagepath_core::ports::PostRepository;

/// Posts kept in a vector, newest ordering applied on read.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_deletes: AtomicBool,
    delete_delay_ms: AtomicU64,
    write_calls: AtomicUsize,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a post as-is.
    pub async fn seed(&self, post: Post) {
        self.posts.write().await.push(post);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Make every delete wait before touching the table.
    pub fn delay_deletes(&self, delay: Duration) {
        self.delete_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Insert, update and delete attempts so far, failed ones included.
    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_reads(&self) -> Result<(), RepoError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RepoError::Connection("store offline".to_string()));
        }
        Ok(())
    }

    fn check_writes(&self, flag: &AtomicBool) -> Result<(), RepoError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if flag.load(Ordering::SeqCst) {
            return Err(RepoError::Query("write rejected".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_recent(&self, limit: Option<usize>) -> Result<Vec<Post>, RepoError> {
        self.check_reads()?;

        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            posts.truncate(limit);
        }
        Ok(posts)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        self.check_reads()?;

        let posts = self.posts.read().await;
        let mut matches = posts.iter().filter(|p| p.slug == slug);
        match (matches.next(), matches.next()) {
            (Some(post), None) => Ok(Some(post.clone())),
            _ => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        self.check_reads()?;
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, _session: &Session, post: PostWrite) -> Result<Post, RepoError> {
        self.check_writes(&self.fail_writes)?;

        let stored = Post {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            title: post.title,
            slug: post.slug,
            content: post.content,
            image_url: post.image_url,
            user_id: post.user_id,
            published_at: None,
        };
        self.posts.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        _session: &Session,
        id: Uuid,
        post: PostWrite,
    ) -> Result<Post, RepoError> {
        self.check_writes(&self.fail_writes)?;

        let mut posts = self.posts.write().await;
        let existing = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        existing.title = post.title;
        existing.slug = post.slug;
        existing.content = post.content;
        existing.image_url = post.image_url;
        existing.user_id = post.user_id;
        Ok(existing.clone())
    }

    async fn delete(&self, _session: &Session, id: Uuid) -> Result<(), RepoError> {
        let delay = self.delete_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.check_writes(&self.fail_deletes)?;

        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
