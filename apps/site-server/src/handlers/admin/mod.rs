//! Admin area handlers. Everything except the login form requires an
//! [`AdminSession`](crate::middleware::auth::AdminSession).

pub mod dashboard;
mod form;
pub mod login;
pub mod posts;

pub const DASHBOARD_PATH: &str = "/me/admin/dashboard";
