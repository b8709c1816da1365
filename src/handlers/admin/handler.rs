//! Admin handler implementations

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use validator::Validate;

use crate::{
    db::repositories::{NewProblem, ProblemChanges},
    error::AppResult,
    handlers::{
        auth::{LoginRequest, LoginResponse},
        json::AppJson,
        path::AppPath,
    },
    middleware::auth::AdminUser,
    models::NewTestCase,
    services::{AuthService, ProblemService},
    state::AppState,
};

use super::{
    request::{AdminRegisterRequest, CreateProblemRequest, ReplaceTestCasesRequest, UpdateProblemRequest},
    response::{
        AdminProblemListResponse, AdminProblemResponse, AdminRegisterResponse, MessageResponse,
        ProblemMutationResponse, TestCasesResponse,
    },
};

/// Register a new admin
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AdminRegisterRequest>,
) -> AppResult<(StatusCode, Json<AdminRegisterResponse>)> {
    payload.validate()?;

    let admin = AuthService::register_admin(
        state.db(),
        &payload.username,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(AdminRegisterResponse {
            message: "Admin registered successfully".to_string(),
            admin_id: admin.id,
        }),
    ))
}

/// Login as admin
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    let (admin, issued) = AuthService::login_admin(
        state.db(),
        &state.config().jwt,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(LoginResponse::new("Admin login successful", issued, admin.username)))
}

/// Create a problem with its test cases
pub async fn create_problem(
    State(state): State<AppState>,
    admin: AdminUser,
    AppJson(payload): AppJson<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemMutationResponse>)> {
    payload.validate()?;

    let test_cases: Vec<NewTestCase> = payload.test_cases.into_iter().map(Into::into).collect();
    let created = ProblemService::create_problem(
        state.db(),
        &admin.id,
        NewProblem {
            slug: &payload.slug,
            title: &payload.title,
            description: &payload.description,
            constraints: payload.constraints.as_deref(),
            difficulty: payload.difficulty,
        },
        &test_cases,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProblemMutationResponse {
            message: "Problem created successfully".to_string(),
            problem: created.into(),
        }),
    ))
}

/// List all problems
pub async fn list_problems(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<AdminProblemListResponse>> {
    let problems = ProblemService::list_problems(state.db()).await?;

    Ok(Json(AdminProblemListResponse {
        problems: problems.into_iter().map(Into::into).collect(),
    }))
}

/// Get a problem with every test case
pub async fn get_problem(
    State(state): State<AppState>,
    _admin: AdminUser,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<AdminProblemResponse>> {
    let problem = ProblemService::get_by_slug(state.db(), &slug).await?;
    Ok(Json(problem.into()))
}

/// Edit problem fields
pub async fn update_problem(
    State(state): State<AppState>,
    _admin: AdminUser,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateProblemRequest>,
) -> AppResult<Json<ProblemMutationResponse>> {
    payload.validate()?;

    let problem = ProblemService::update_problem(
        state.db(),
        id,
        ProblemChanges {
            title: payload.title.as_deref(),
            description: payload.description.as_deref(),
            constraints: payload.constraints.as_deref(),
            difficulty: payload.difficulty,
        },
    )
    .await?;

    Ok(Json(ProblemMutationResponse {
        message: "Problem updated successfully".to_string(),
        problem: problem.into(),
    }))
}

/// Replace all test cases of a problem
pub async fn replace_test_cases(
    State(state): State<AppState>,
    _admin: AdminUser,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ReplaceTestCasesRequest>,
) -> AppResult<Json<TestCasesResponse>> {
    payload.validate()?;

    let test_cases: Vec<NewTestCase> = payload.test_cases.into_iter().map(Into::into).collect();
    let replaced = ProblemService::replace_test_cases(state.db(), id, &test_cases).await?;

    Ok(Json(TestCasesResponse {
        message: "Test cases replaced successfully".to_string(),
        test_cases: replaced.into_iter().map(Into::into).collect(),
    }))
}

/// Delete a problem
pub async fn delete_problem(
    State(state): State<AppState>,
    _admin: AdminUser,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    ProblemService::delete_problem(state.db(), id).await?;

    Ok(Json(MessageResponse {
        message: "Problem deleted successfully".to_string(),
    }))
}
