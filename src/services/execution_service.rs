//! Ad-hoc code execution service
//!
//! Runs code without persisting anything: either once on caller-supplied
//! stdin, or once per sample test case of a problem.

use crate::{
    error::AppResult,
    executor::{ExecutionClient, ExecutionOutput},
    judge::CaseOutcome,
    models::{Language, TestCase},
};

/// Outcome of running code against one sample test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRun {
    pub input: String,
    pub expected_output: String,
    pub output: ExecutionOutput,
    pub passed: bool,
}

/// Execution service for business logic
pub struct ExecutionService;

impl ExecutionService {
    /// Run code once on the given stdin.
    ///
    /// An unsupported language is rejected before any remote call; executor
    /// failures surface as `AppError::Executor`.
    pub async fn run_code(
        executor: &dyn ExecutionClient,
        language: &str,
        code: &str,
        input: &str,
    ) -> AppResult<ExecutionOutput> {
        let language: Language = language.parse()?;

        let output = executor.execute(language, code, input).await?;
        tracing::debug!(language = %language, exit_code = output.exit_code, "Code executed");

        Ok(output)
    }

    /// Run code against every sample test case, in order, without stopping
    /// at the first failure
    pub async fn run_samples(
        executor: &dyn ExecutionClient,
        language: &str,
        code: &str,
        test_cases: &[TestCase],
    ) -> AppResult<Vec<SampleRun>> {
        let language: Language = language.parse()?;
        let mut runs = Vec::new();

        for test_case in test_cases.iter().filter(|tc| tc.is_sample) {
            let output = executor.execute(language, code, &test_case.input).await?;
            let passed = CaseOutcome::classify(&output, &test_case.output) == CaseOutcome::Passed;

            runs.push(SampleRun {
                input: test_case.input.clone(),
                expected_output: test_case.output.clone(),
                output,
                passed,
            });
        }

        Ok(runs)
    }
}
