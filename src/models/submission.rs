//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: i32,
    pub language: String,
    #[serde(skip_serializing)]
    pub code: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub judged_at: Option<DateTime<Utc>>,
}

/// Submission joined with the title and slug of its problem
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionWithProblem {
    pub id: Uuid,
    pub language: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub problem_title: String,
    pub problem_slug: String,
}

/// Life-cycle status of a submission
///
/// A submission starts `Pending` and moves to exactly one terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "submission_status")]
pub enum SubmissionStatus {
    Pending,
    Accepted,
    #[serde(rename = "Wrong Answer")]
    #[sqlx(rename = "Wrong Answer")]
    WrongAnswer,
    #[serde(rename = "Runtime Error")]
    #[sqlx(rename = "Runtime Error")]
    RuntimeError,
}

impl SubmissionStatus {
    /// Get status as its display/storage string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::RuntimeError => "Runtime Error",
        }
    }

    /// Check if this is a final status (judging complete)
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
