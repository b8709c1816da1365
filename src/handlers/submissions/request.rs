//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_SOURCE_CODE_LENGTH;

/// Create submission request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    /// Problem ID to submit for
    pub problem_id: i32,

    /// Programming language; checked against the supported set by the service
    pub language: String,

    /// Source code
    #[validate(length(min = 1, max = MAX_SOURCE_CODE_LENGTH))]
    pub code: String,
}
