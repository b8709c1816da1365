//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Difficulty, Problem, ProblemWithTestCases, TestCase};

/// Admin registration success response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRegisterResponse {
    pub message: String,
    pub admin_id: Uuid,
}

/// Test case with full contents
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResponse {
    pub id: i32,
    pub input: String,
    pub output: String,
    pub is_sample: bool,
    pub position: i32,
}

impl From<TestCase> for TestCaseResponse {
    fn from(tc: TestCase) -> Self {
        Self {
            id: tc.id,
            input: tc.input,
            output: tc.output,
            is_sample: tc.is_sample,
            position: tc.position,
        }
    }
}

/// Problem as seen by admins
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProblemResponse {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub constraints: Option<String>,
    pub difficulty: Difficulty,
    pub admin_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_cases: Option<Vec<TestCaseResponse>>,
}

impl From<Problem> for AdminProblemResponse {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id,
            slug: problem.slug,
            title: problem.title,
            description: problem.description,
            constraints: problem.constraints,
            difficulty: problem.difficulty,
            admin_id: problem.admin_id,
            created_at: problem.created_at,
            updated_at: problem.updated_at,
            test_cases: None,
        }
    }
}

impl From<ProblemWithTestCases> for AdminProblemResponse {
    fn from(full: ProblemWithTestCases) -> Self {
        Self {
            test_cases: Some(full.test_cases.into_iter().map(Into::into).collect()),
            ..full.problem.into()
        }
    }
}

/// Problem mutation response
#[derive(Debug, Serialize)]
pub struct ProblemMutationResponse {
    pub message: String,
    pub problem: AdminProblemResponse,
}

/// All problems
#[derive(Debug, Serialize)]
pub struct AdminProblemListResponse {
    pub problems: Vec<AdminProblemResponse>,
}

/// Replaced test-case set
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCasesResponse {
    pub message: String,
    pub test_cases: Vec<TestCaseResponse>,
}

/// Plain acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
