//! Domain-level error types.

use thiserror::Error;

use crate::domain::ValidationErrors;

/// Remote data store failures.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Remote object store failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage connection failed: {0}")]
    Connection(String),

    #[error("Upload rejected: {0}")]
    Upload(String),

    #[error("Remove rejected: {0}")]
    Remove(String),

    #[error("URL does not reference a stored object: {0}")]
    UnknownUrl(String),
}

/// Errors returned by [`crate::PostService`] write operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
