//! In-memory adapters.
//!
//! Used by the test suites and for running the site without a backend.
//! Each adapter can be told to fail so error paths can be exercised.

mod auth;
mod images;
mod posts;

pub use auth::InMemoryAuthService;
pub use images::InMemoryImageStore;
pub use posts::InMemoryPostRepository;
