//! Admin request DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    constants::{
        MAX_PASSWORD_LENGTH, MAX_PROBLEM_DESCRIPTION_LENGTH, MAX_PROBLEM_TITLE_LENGTH,
        MAX_SLUG_LENGTH, MAX_USERNAME_LENGTH, MIN_ADMIN_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
        MIN_PROBLEM_DESCRIPTION_LENGTH, MIN_PROBLEM_TITLE_LENGTH, MIN_SLUG_LENGTH,
    },
    models::{Difficulty, NewTestCase},
    utils::validate_slug,
};

/// Admin registration request
#[derive(Debug, Deserialize, Validate)]
pub struct AdminRegisterRequest {
    #[validate(length(min = MIN_ADMIN_USERNAME_LENGTH, max = MAX_USERNAME_LENGTH))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,
}

/// One test case as sent by an admin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseInput {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub is_sample: bool,
}

impl From<TestCaseInput> for NewTestCase {
    fn from(tc: TestCaseInput) -> Self {
        Self {
            input: tc.input,
            output: tc.output,
            is_sample: tc.is_sample,
        }
    }
}

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProblemRequest {
    #[validate(length(min = MIN_PROBLEM_TITLE_LENGTH, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = MIN_PROBLEM_DESCRIPTION_LENGTH, max = MAX_PROBLEM_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(
        length(min = MIN_SLUG_LENGTH, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: String,

    pub difficulty: Difficulty,

    pub constraints: Option<String>,

    /// Judging order is the order of this list
    #[validate(length(min = 1))]
    pub test_cases: Vec<TestCaseInput>,
}

/// Partial problem update; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProblemRequest {
    #[validate(length(min = MIN_PROBLEM_TITLE_LENGTH, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = MIN_PROBLEM_DESCRIPTION_LENGTH, max = MAX_PROBLEM_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub constraints: Option<String>,

    pub difficulty: Option<Difficulty>,
}

/// Replace all test cases of a problem
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTestCasesRequest {
    #[validate(length(min = 1))]
    pub test_cases: Vec<TestCaseInput>,
}
