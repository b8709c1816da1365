//! Problem request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_SOURCE_CODE_LENGTH;

/// Run code against the sample test cases of a problem
#[derive(Debug, Deserialize, Validate)]
pub struct RunSamplesRequest {
    pub language: String,

    #[validate(length(min = 1, max = MAX_SOURCE_CODE_LENGTH))]
    pub code: String,
}
