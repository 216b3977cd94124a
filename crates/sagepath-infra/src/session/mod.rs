//! Server-side session storage and the signed session cookie.

mod memory;

#[cfg(feature = "session-jwt")]
mod jwt;

pub use memory::InMemorySessionStore;

#[cfg(feature = "session-jwt")]
pub use jwt::{JwtConfig, JwtSessionTokenService};
