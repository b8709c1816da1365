//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod execute;
pub mod health;
pub mod json;
pub mod path;
pub mod problems;
pub mod submissions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/users", users::routes())
        .nest("/problems", problems::routes())
        .nest("/submissions", submissions::routes())
        .nest("/execute", execute::routes())
        .nest("/admin", admin::routes())
}
