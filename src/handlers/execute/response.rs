//! Execution response DTOs

use serde::Serialize;

use crate::executor::ExecutionOutput;

/// Raw program output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    pub output: String,
    pub error: String,
    pub exit_code: i32,
}

impl From<ExecutionOutput> for ExecuteResponse {
    fn from(output: ExecutionOutput) -> Self {
        Self {
            output: output.stdout,
            error: output.stderr,
            exit_code: output.exit_code,
        }
    }
}
