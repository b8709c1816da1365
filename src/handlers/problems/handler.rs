//! Problem handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::{json::AppJson, path::AppPath},
    services::{ExecutionService, ProblemService},
    state::AppState,
};

use super::{
    request::RunSamplesRequest,
    response::{ProblemDetailResponse, ProblemListResponse, RunSamplesResponse},
};

/// List all problems
pub async fn list_problems(State(state): State<AppState>) -> AppResult<Json<ProblemListResponse>> {
    let problems = ProblemService::list_problems(state.db()).await?;

    Ok(Json(ProblemListResponse {
        problems: problems.into_iter().map(Into::into).collect(),
    }))
}

/// Get a problem with its sample test cases
pub async fn get_problem(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<ProblemDetailResponse>> {
    let problem = ProblemService::get_by_slug(state.db(), &slug).await?;
    Ok(Json(problem.into()))
}

/// Run code against the sample test cases of a problem
pub async fn run_samples(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppJson(payload): AppJson<RunSamplesRequest>,
) -> AppResult<Json<RunSamplesResponse>> {
    payload.validate()?;

    let problem = ProblemService::get_by_slug(state.db(), &slug).await?;
    let runs = ExecutionService::run_samples(
        state.executor(),
        &payload.language,
        &payload.code,
        &problem.test_cases,
    )
    .await?;

    Ok(Json(runs.into()))
}
