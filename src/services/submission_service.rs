//! Submission service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::SubmissionRepository,
    error::{AppError, AppResult},
    executor::ExecutionClient,
    judge::{Judge, JudgeOutcome, JudgeRequest, JudgeStore},
    models::{Language, Submission, SubmissionWithProblem},
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Validate and judge a submission synchronously
    pub async fn submit(
        store: &dyn JudgeStore,
        executor: &dyn ExecutionClient,
        user_id: Uuid,
        problem_id: i32,
        language: &str,
        code: &str,
    ) -> AppResult<JudgeOutcome> {
        // Rejected before anything is stored or executed
        let language: Language = language.parse()?;

        Judge::new(store, executor)
            .judge(JudgeRequest {
                user_id,
                problem_id,
                language,
                code,
            })
            .await
    }

    /// Submission history of a user, newest first
    pub async fn list_for_user(
        store: &dyn JudgeStore,
        user_id: Uuid,
    ) -> AppResult<Vec<SubmissionWithProblem>> {
        store.list_submissions_for_user(user_id).await
    }

    /// Get one of the user's own submissions
    pub async fn get_own(pool: &PgPool, user_id: &Uuid, id: &Uuid) -> AppResult<Submission> {
        SubmissionRepository::find_by_id(pool, id)
            .await?
            // Other users' submissions are indistinguishable from missing ones
            .filter(|submission| submission.user_id == *user_id)
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }
}
