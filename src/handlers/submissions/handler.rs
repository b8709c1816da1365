//! Submission handler implementations

use axum::{Json, extract::State};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::{json::AppJson, path::AppPath},
    middleware::auth::AuthenticatedUser,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::CreateSubmissionRequest,
    response::{SubmissionListResponse, SubmissionResponse, SubmitResponse},
};

/// Submit a solution and judge it before responding
pub async fn create_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppJson(payload): AppJson<CreateSubmissionRequest>,
) -> AppResult<Json<SubmitResponse>> {
    payload.validate()?;

    let outcome = SubmissionService::submit(
        state.judge_store(),
        state.executor(),
        auth_user.id,
        payload.problem_id,
        &payload.language,
        &payload.code,
    )
    .await?;

    Ok(Json(SubmitResponse {
        message: "Submission processed".to_string(),
        submission_id: outcome.submission.id,
        status: outcome.submission.status,
    }))
}

/// List the caller's submissions, newest first
pub async fn list_my_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<SubmissionListResponse>> {
    let submissions = SubmissionService::list_for_user(state.judge_store(), auth_user.id).await?;

    Ok(Json(SubmissionListResponse {
        submissions: submissions.into_iter().map(Into::into).collect(),
    }))
}

/// Get one of the caller's submissions
pub async fn get_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::get_own(state.db(), &auth_user.id, &id).await?;
    Ok(Json(submission.into()))
}
