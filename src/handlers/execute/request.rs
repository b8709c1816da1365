//! Execution request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_SOURCE_CODE_LENGTH;

/// Run code once on optional stdin
#[derive(Debug, Deserialize, Validate)]
pub struct ExecuteRequest {
    pub language: String,

    #[validate(length(min = 1, max = MAX_SOURCE_CODE_LENGTH))]
    pub code: String,

    #[serde(default)]
    pub input: String,
}
