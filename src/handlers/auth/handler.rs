//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::json::AppJson,
    middleware::auth::AuthenticatedUser,
    services::{AuthService, UserService},
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{CurrentUserResponse, LoginResponse, RegisterResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;

    let user = AuthService::register_user(
        state.db(),
        &payload.username,
        &payload.email,
        &payload.password,
    )
    .await?;

    let response = RegisterResponse {
        message: "User registered successfully".to_string(),
        user_id: user.id,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    let (user, issued) = AuthService::login_user(
        state.db(),
        &state.config().jwt,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(LoginResponse::new("Login successful", issued, user.username)))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = UserService::get_user_by_id(state.db(), &auth_user.id).await?;
    Ok(Json(user.into()))
}
