//! Problem service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{AdminRepository, NewProblem, ProblemChanges, ProblemRepository},
    error::{AppError, AppResult},
    models::{NewTestCase, Problem, ProblemWithTestCases, TestCase},
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List every problem
    pub async fn list_problems(pool: &PgPool) -> AppResult<Vec<Problem>> {
        ProblemRepository::list(pool).await
    }

    /// Get a problem with all of its test cases by slug
    pub async fn get_by_slug(pool: &PgPool, slug: &str) -> AppResult<ProblemWithTestCases> {
        ProblemRepository::find_with_test_cases_by_slug(pool, slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Create a problem with its test cases
    pub async fn create_problem(
        pool: &PgPool,
        admin_id: &Uuid,
        problem: NewProblem<'_>,
        test_cases: &[NewTestCase],
    ) -> AppResult<ProblemWithTestCases> {
        Self::ensure_test_cases(test_cases)?;

        // The token can outlive the account it was issued for
        if !AdminRepository::exists_by_id(pool, admin_id).await? {
            tracing::debug!(admin_id = %admin_id, "Problem create by unknown admin");
            return Err(AppError::Unauthorized);
        }

        if ProblemRepository::find_by_slug(pool, problem.slug).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "Problem with this slug already exists".to_string(),
            ));
        }

        let created = ProblemRepository::create(pool, admin_id, problem, test_cases)
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent create of the same slug
                AppError::AlreadyExists(_) => {
                    AppError::AlreadyExists("Problem with this slug already exists".to_string())
                }
                other => other,
            })?;

        tracing::info!(
            problem_id = created.problem.id,
            slug = %created.problem.slug,
            test_cases = created.test_cases.len(),
            admin_id = %admin_id,
            "Problem created"
        );

        Ok(created)
    }

    /// Partially update a problem
    pub async fn update_problem(
        pool: &PgPool,
        id: i32,
        changes: ProblemChanges<'_>,
    ) -> AppResult<Problem> {
        ProblemRepository::update(pool, id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Replace the whole test-case set of a problem
    pub async fn replace_test_cases(
        pool: &PgPool,
        id: i32,
        test_cases: &[NewTestCase],
    ) -> AppResult<Vec<TestCase>> {
        Self::ensure_test_cases(test_cases)?;

        if ProblemRepository::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        let replaced = ProblemRepository::replace_test_cases(pool, id, test_cases).await?;
        tracing::info!(problem_id = id, test_cases = replaced.len(), "Test cases replaced");

        Ok(replaced)
    }

    /// Delete a problem together with its test cases and submissions
    pub async fn delete_problem(pool: &PgPool, id: i32) -> AppResult<()> {
        if !ProblemRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        tracing::info!(problem_id = id, "Problem deleted");
        Ok(())
    }

    fn ensure_test_cases(test_cases: &[NewTestCase]) -> AppResult<()> {
        if test_cases.is_empty() {
            return Err(AppError::Validation(
                "At least one test case is required".to_string(),
            ));
        }
        Ok(())
    }
}
