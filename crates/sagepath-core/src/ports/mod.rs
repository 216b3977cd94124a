//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;
mod session_store;
mod storage;

pub use auth::{AuthError, AuthService, SessionClaims, SessionTokenService};
pub use repository::PostRepository;
pub use session_store::{SessionRecord, SessionStore, SessionStoreError};
pub use storage::ImageStore;
