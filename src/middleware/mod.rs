//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{AdminUser, AuthenticatedUser};
pub use logging::logging_middleware;
