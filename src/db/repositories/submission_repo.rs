//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Submission, SubmissionStatus, SubmissionWithProblem},
};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission in `Pending` state
    pub async fn create_pending(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: i32,
        language: &str,
        code: &str,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (user_id, problem_id, language, code, status)
            VALUES ($1, $2, $3, $4, 'Pending')
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(language)
        .bind(code)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// Set the terminal status of a pending submission.
    ///
    /// Only a `Pending` row is updated; anything else is a `Conflict`
    /// (or `NotFound` if the row does not exist).
    pub async fn update_status(
        pool: &PgPool,
        id: &Uuid,
        status: SubmissionStatus,
    ) -> AppResult<Submission> {
        let updated = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET status = $2, judged_at = NOW()
            WHERE id = $1 AND status = 'Pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(submission) => Ok(submission),
            None => match Self::find_by_id(pool, id).await? {
                Some(_) => Err(AppError::Conflict(
                    "Submission has already been judged".to_string(),
                )),
                None => Err(AppError::NotFound("Submission not found".to_string())),
            },
        }
    }

    /// List submissions of a user with their problem, newest first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Vec<SubmissionWithProblem>> {
        let submissions = sqlx::query_as::<_, SubmissionWithProblem>(
            r#"
            SELECT
                s.id,
                s.language,
                s.status,
                s.created_at,
                p.title AS problem_title,
                p.slug AS problem_slug
            FROM submissions s
            JOIN problems p ON p.id = s.problem_id
            WHERE s.user_id = $1
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }
}
