//! User response DTOs

use serde::Serialize;

use crate::models::UserStats;

/// Submission statistics of the current user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsResponse {
    pub total_submissions: i64,
    pub accepted: i64,
    pub wrong_answer: i64,
    pub runtime_error: i64,
    pub pending: i64,
    pub solved_problems: i64,
}

impl From<UserStats> for UserStatsResponse {
    fn from(stats: UserStats) -> Self {
        Self {
            total_submissions: stats.total_submissions,
            accepted: stats.accepted,
            wrong_answer: stats.wrong_answer,
            runtime_error: stats.runtime_error,
            pending: stats.pending,
            solved_problems: stats.solved_problems,
        }
    }
}
