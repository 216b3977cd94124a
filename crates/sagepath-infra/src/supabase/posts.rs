//! PostgREST implementation of the posts table.

use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode};
use uuid::Uuid;

use sagepath_core::domain::{Post, PostWrite, Session};
use sagepath_core::error::RepoError;
use sagepath_core::ports::PostRepository;

use super::{SupabaseClient, error_text};

const POSTS_PATH: &str = "rest/v1/posts";

/// Posts table accessed through PostgREST.
pub struct SupabasePostRepository {
    client: SupabaseClient,
}

impl SupabasePostRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, query: &[(&str, String)]) -> Result<Vec<Post>, RepoError> {
        let response = self
            .client
            .request(Method::GET, POSTS_PATH, None)
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        rows(checked(response).await?).await
    }

    async fn write(
        &self,
        method: Method,
        session: &Session,
        filter: Option<Uuid>,
        body: Option<&PostWrite>,
    ) -> Result<Vec<Post>, RepoError> {
        let mut request = self
            .client
            .request(method, POSTS_PATH, Some(&session.access_token))
            .header("Prefer", "return=representation");
        if let Some(id) = filter {
            request = request.query(&[("id", format!("eq.{id}"))]);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        rows(checked(response).await?).await
    }
}

async fn checked(response: Response) -> Result<Response, RepoError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = error_text(response).await;
    Err(match status {
        StatusCode::CONFLICT => RepoError::Constraint(message),
        _ => RepoError::Query(message),
    })
}

async fn rows(response: Response) -> Result<Vec<Post>, RepoError> {
    response
        .json::<Vec<Post>>()
        .await
        .map_err(|e| RepoError::Query(format!("Unexpected response body: {e}")))
}

#[async_trait]
impl PostRepository for SupabasePostRepository {
    async fn list_recent(&self, limit: Option<usize>) -> Result<Vec<Post>, RepoError> {
        let mut query = vec![("order", "created_at.desc".to_string())];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.fetch(&query).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        // Two rows are enough to tell a unique match from a collision.
        let mut found = self
            .fetch(&[("slug", format!("eq.{slug}")), ("limit", "2".to_string())])
            .await?;

        if found.len() > 1 {
            tracing::warn!(slug = %slug, "Several posts share this slug");
            return Ok(None);
        }
        Ok(found.pop())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let found = self.fetch(&[("id", format!("eq.{id}"))]).await?;
        Ok(found.into_iter().next())
    }

    async fn insert(&self, session: &Session, post: PostWrite) -> Result<Post, RepoError> {
        self.write(Method::POST, session, None, Some(&post))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Query("Insert returned no row".to_string()))
    }

    async fn update(
        &self,
        session: &Session,
        id: Uuid,
        post: PostWrite,
    ) -> Result<Post, RepoError> {
        self.write(Method::PATCH, session, Some(id), Some(&post))
            .await?
            .into_iter()
            .next()
            .ok_or(RepoError::NotFound)
    }

    async fn delete(&self, session: &Session, id: Uuid) -> Result<(), RepoError> {
        let deleted = self.write(Method::DELETE, session, Some(id), None).await?;
        if deleted.is_empty() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
