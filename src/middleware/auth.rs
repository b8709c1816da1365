//! Authentication extractors
//!
//! The principal is decoded from the `Authorization: Bearer <token>` header
//! on every request that asks for one. Handlers take [`AuthenticatedUser`] or
//! [`AdminUser`] as an argument; nothing is stored on the request.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    constants::roles,
    error::AppError,
    services::auth_service::{AuthService, Claims},
    state::AppState,
};

/// Problem-solving user extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
}

/// Problem author extracted from JWT
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
}

/// Token from an `Authorization` header value
fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Decode and verify the bearer token carried by a request
fn claims_from_parts(parts: &Parts, state: &AppState) -> Result<(Uuid, Claims), AppError> {
    let path = parts.uri.path();

    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            debug!(path = %path, "Auth failed: No Authorization header");
            AppError::Unauthorized
        })?;

    let token = bearer_token(header).ok_or_else(|| {
        debug!(path = %path, "Auth failed: expected 'Bearer <token>'");
        AppError::Unauthorized
    })?;

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: Token verification failed");
        e
    })?;

    let id = Uuid::parse_str(&claims.sub).map_err(|e| {
        debug!(path = %path, sub = %claims.sub, error = ?e, "Auth failed: Invalid principal ID in token");
        AppError::InvalidToken
    })?;

    Ok((id, claims))
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let (id, claims) = claims_from_parts(parts, state)?;

        if claims.role != roles::USER {
            return Err(AppError::Forbidden(
                "This action requires a user account".to_string(),
            ));
        }

        Ok(Self {
            id,
            username: claims.username,
        })
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let (id, claims) = claims_from_parts(parts, state)?;

        if claims.role != roles::ADMIN {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(Self {
            id,
            username: claims.username,
        })
    }
}
