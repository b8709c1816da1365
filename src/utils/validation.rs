//! Input validation utilities
//!
//! Custom validators plugged into `#[validate(custom(function = ...))]` on
//! request DTOs.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern is valid"));

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Letters, digits and underscores only
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !USERNAME_RE.is_match(username) {
        return Err(invalid(
            "username",
            "Username can only contain letters, numbers and underscores",
        ));
    }
    Ok(())
}

/// Lowercase words separated by single hyphens, e.g. `two-sum`
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if !SLUG_RE.is_match(slug) {
        return Err(invalid(
            "slug",
            "Slug must be lowercase letters and digits separated by hyphens",
        ));
    }
    Ok(())
}

/// User password strength: a letter, a digit and a special character
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if !password.chars().any(|c| c.is_alphabetic()) {
        return Err(invalid("password", "Password must contain at least one letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid("password", "Password must contain at least one number"));
    }
    if !password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()) {
        return Err(invalid(
            "password",
            "Password must contain at least one special character",
        ));
    }
    Ok(())
}
