//! Verdict types and determination logic

use serde::{Deserialize, Serialize};

use crate::{executor::ExecutionOutput, models::SubmissionStatus};

/// Terminal outcome of judging a whole submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every test case exited cleanly with matching output
    Accepted,
    /// First failing test case exited cleanly with different output
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
    /// First failing test case exited non-zero, or could not be executed
    #[serde(rename = "Runtime Error")]
    RuntimeError,
}

impl Verdict {
    /// Get verdict as its display string
    pub fn as_str(&self) -> &'static str {
        SubmissionStatus::from(*self).as_str()
    }
}

impl From<Verdict> for SubmissionStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Accepted => SubmissionStatus::Accepted,
            Verdict::WrongAnswer => SubmissionStatus::WrongAnswer,
            Verdict::RuntimeError => SubmissionStatus::RuntimeError,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    WrongAnswer,
    RuntimeError,
}

impl CaseOutcome {
    /// Classify one execution against the expected output
    pub fn classify(output: &ExecutionOutput, expected: &str) -> Self {
        if !output.succeeded() {
            Self::RuntimeError
        } else if outputs_match(&output.stdout, expected) {
            Self::Passed
        } else {
            Self::WrongAnswer
        }
    }

    /// Verdict this outcome forces on the submission, if it is a failure
    pub fn failure(self) -> Option<Verdict> {
        match self {
            Self::Passed => None,
            Self::WrongAnswer => Some(Verdict::WrongAnswer),
            Self::RuntimeError => Some(Verdict::RuntimeError),
        }
    }
}

/// Exact comparison after trimming leading and trailing whitespace
///
/// Interior whitespace, letter case and numeric formatting must match exactly.
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    actual.trim() == expected.trim()
}
