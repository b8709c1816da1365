//! Utility functions

pub mod validation;

pub use validation::{validate_password, validate_slug, validate_username};
