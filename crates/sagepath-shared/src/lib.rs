//! # Sagepath Shared
//!
//! Request and response payloads exchanged between browser forms and the
//! server.

pub mod dto;

pub use dto::{DeleteConfirmRequest, HealthResponse, LoginRequest};
