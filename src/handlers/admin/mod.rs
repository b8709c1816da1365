//! Admin handlers
//!
//! Admin account registration/login and problem management. Every
//! `/problems` route requires an admin token.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route(
            "/problems",
            post(handler::create_problem).get(handler::list_problems),
        )
        // GET addresses the problem by slug, PUT and DELETE by numeric id
        .route(
            "/problems/{key}",
            get(handler::get_problem)
                .put(handler::update_problem)
                .delete(handler::delete_problem),
        )
        .route("/problems/{key}/test-cases", put(handler::replace_test_cases))
}
