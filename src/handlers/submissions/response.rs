//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Submission, SubmissionStatus, SubmissionWithProblem};

/// Result of a judged submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub message: String,
    pub submission_id: Uuid,
    pub status: SubmissionStatus,
}

/// Problem reference inside a history entry
#[derive(Debug, Serialize)]
pub struct ProblemRef {
    pub title: String,
    pub slug: String,
}

/// One entry of a user's submission history
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub id: Uuid,
    pub language: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub problem: ProblemRef,
}

impl From<SubmissionWithProblem> for SubmissionSummary {
    fn from(s: SubmissionWithProblem) -> Self {
        Self {
            id: s.id,
            language: s.language,
            status: s.status,
            created_at: s.created_at,
            problem: ProblemRef {
                title: s.problem_title,
                slug: s.problem_slug,
            },
        }
    }
}

/// Submission history, newest first
#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<SubmissionSummary>,
}

/// Full submission including its source code
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub problem_id: i32,
    pub language: String,
    pub code: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub judged_at: Option<DateTime<Utc>>,
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            problem_id: s.problem_id,
            language: s.language,
            code: s.code,
            status: s.status,
            created_at: s.created_at,
            judged_at: s.judged_at,
        }
    }
}
