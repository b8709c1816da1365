//! Execution handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::AppResult, handlers::json::AppJson, services::ExecutionService, state::AppState,
};

use super::{request::ExecuteRequest, response::ExecuteResponse};

/// Run code once and return its raw output; nothing is stored
pub async fn execute_code(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ExecuteRequest>,
) -> AppResult<Json<ExecuteResponse>> {
    payload.validate()?;

    let output = ExecutionService::run_code(
        state.executor(),
        &payload.language,
        &payload.code,
        &payload.input,
    )
    .await?;

    Ok(Json(output.into()))
}
