//! User handler implementations

use axum::{Json, extract::State};

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, services::UserService,
    state::AppState,
};

use super::response::UserStatsResponse;

/// Submission statistics of the caller
pub async fn get_my_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UserStatsResponse>> {
    let stats = UserService::get_stats(state.db(), &auth_user.id).await?;
    Ok(Json(stats.into()))
}
