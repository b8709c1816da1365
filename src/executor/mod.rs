//! Remote code execution
//!
//! HeapJudge never runs submitted code itself. Every run is delegated to an
//! external sandboxed executor through the [`ExecutionClient`] trait; the
//! production implementation is [`PistonClient`].

pub mod piston;

use async_trait::async_trait;

use crate::models::Language;

pub use piston::PistonClient;

/// Result of running one program on one stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecutionOutput {
    /// Whether the program exited cleanly
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Failure to obtain a result from the executor
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExecutionError {
    #[error("request to executor failed: {0}")]
    Transport(String),

    #[error("executor responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed executor response: {0}")]
    MalformedResponse(String),
}

/// Runs a single (language, source, stdin) triple remotely
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExecutionClient: Send + Sync {
    async fn execute(
        &self,
        language: Language,
        source: &str,
        stdin: &str,
    ) -> Result<ExecutionOutput, ExecutionError>;
}
