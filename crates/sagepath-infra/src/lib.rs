//! # Sagepath Infrastructure
//!
//! Concrete implementations of the ports defined in `sagepath-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `supabase` - Posts table, image storage and auth over the Supabase REST APIs
//! - `session-jwt` - Signed JWT session cookies

pub mod memory;
pub mod session;

#[cfg(feature = "supabase")]
pub mod supabase;

// Re-exports - In-Memory
pub use memory::{InMemoryAuthService, InMemoryImageStore, InMemoryPostRepository};
pub use session::InMemorySessionStore;

#[cfg(feature = "session-jwt")]
pub use session::{JwtConfig, JwtSessionTokenService};

#[cfg(feature = "supabase")]
pub use supabase::{
    SupabaseAuthService, SupabaseClient, SupabaseConfig, SupabaseImageStore,
    SupabasePostRepository,
};
