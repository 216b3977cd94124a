//! # Sagepath Core
//!
//! The domain layer of the practice website: posts, sessions, the delete
//! flow, form validation and the post lifecycle service.
//! This crate has no infrastructure dependencies; remote services are
//! reached only through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod sitemap;

pub use error::{RepoError, ServiceError, StorageError};
pub use service::PostService;
