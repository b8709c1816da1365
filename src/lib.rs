//! HeapJudge - Online Coding Judge
//!
//! This library provides the core functionality for the HeapJudge platform,
//! an online judge that grades submitted programs against hidden test cases.
//!
//! # Features
//!
//! - Synchronous judging: a submission is answered with its final verdict
//! - Remote execution through a Piston-compatible service (C++, Python,
//!   JavaScript, Java)
//! - Separate user and admin principals with JWT authentication
//! - Admin problem and test-case management
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Judge**: Verdict state machine over a store and an execution client
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::{Router, http::HeaderValue};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the full HTTP application with its middleware stack
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(constants::API_BASE_PATH, handlers::routes())
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(RequestBodyLimitLayer::new(constants::MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(state.config().server.cors_origin.as_deref()))
        .with_state(state)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let allow_origin = match origin.and_then(|o| HeaderValue::from_str(o).ok()) {
        Some(origin) => AllowOrigin::exact(origin),
        None => {
            if let Some(raw) = origin {
                tracing::warn!(origin = %raw, "Invalid CORS_ORIGIN, allowing any origin");
            }
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
