//! Postgres-backed judge store

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    judge::{JudgeStore, Verdict},
    models::{Language, ProblemWithTestCases, Submission, SubmissionWithProblem},
};

use super::repositories::{ProblemRepository, SubmissionRepository};

/// `JudgeStore` over the application's connection pool
#[derive(Clone)]
pub struct PgJudgeStore {
    pool: PgPool,
}

impl PgJudgeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JudgeStore for PgJudgeStore {
    async fn find_problem_with_test_cases(
        &self,
        problem_id: i32,
    ) -> AppResult<Option<ProblemWithTestCases>> {
        ProblemRepository::find_with_test_cases(&self.pool, problem_id).await
    }

    async fn create_pending_submission(
        &self,
        user_id: Uuid,
        problem_id: i32,
        language: Language,
        code: &str,
    ) -> AppResult<Submission> {
        SubmissionRepository::create_pending(&self.pool, &user_id, problem_id, language.as_str(), code)
            .await
    }

    async fn update_submission_status(
        &self,
        submission_id: Uuid,
        verdict: Verdict,
    ) -> AppResult<Submission> {
        SubmissionRepository::update_status(&self.pool, &submission_id, verdict.into()).await
    }

    async fn list_submissions_for_user(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<SubmissionWithProblem>> {
        SubmissionRepository::list_for_user(&self.pool, &user_id).await
    }
}
