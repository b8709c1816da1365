//! Problem repository

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Difficulty, NewTestCase, Problem, ProblemWithTestCases, TestCase},
};

/// Fields of a problem to be inserted
#[derive(Debug, Clone)]
pub struct NewProblem<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub constraints: Option<&'a str>,
    pub difficulty: Difficulty,
}

/// Partial problem edit; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct ProblemChanges<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub constraints: Option<&'a str>,
    pub difficulty: Option<Difficulty>,
}

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a problem together with its test cases in one transaction
    pub async fn create(
        pool: &PgPool,
        admin_id: &Uuid,
        problem: NewProblem<'_>,
        test_cases: &[NewTestCase],
    ) -> AppResult<ProblemWithTestCases> {
        let mut tx = pool.begin().await?;

        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (slug, title, description, constraints, difficulty, admin_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(problem.slug)
        .bind(problem.title)
        .bind(problem.description)
        .bind(problem.constraints)
        .bind(problem.difficulty)
        .bind(admin_id)
        .fetch_one(&mut *tx)
        .await?;

        let test_cases = Self::insert_test_cases(&mut tx, problem.id, test_cases).await?;

        tx.commit().await?;

        Ok(ProblemWithTestCases {
            problem,
            test_cases,
        })
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Find problem by slug
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE slug = $1"#)
            .bind(slug)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Find problem by ID with all its test cases in judging order
    pub async fn find_with_test_cases(
        pool: &PgPool,
        id: i32,
    ) -> AppResult<Option<ProblemWithTestCases>> {
        let Some(problem) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let test_cases = Self::get_test_cases(pool, problem.id).await?;

        Ok(Some(ProblemWithTestCases {
            problem,
            test_cases,
        }))
    }

    /// Find problem by slug with all its test cases in judging order
    pub async fn find_with_test_cases_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> AppResult<Option<ProblemWithTestCases>> {
        let Some(problem) = Self::find_by_slug(pool, slug).await? else {
            return Ok(None);
        };
        let test_cases = Self::get_test_cases(pool, problem.id).await?;

        Ok(Some(ProblemWithTestCases {
            problem,
            test_cases,
        }))
    }

    /// List all problems ordered by ID
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems ORDER BY id"#)
            .fetch_all(pool)
            .await?;

        Ok(problems)
    }

    /// Update problem fields
    pub async fn update(
        pool: &PgPool,
        id: i32,
        changes: ProblemChanges<'_>,
    ) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                constraints = COALESCE($4, constraints),
                difficulty = COALESCE($5, difficulty),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.constraints)
        .bind(changes.difficulty)
        .fetch_optional(pool)
        .await?;

        Ok(problem)
    }

    /// Delete problem; test cases and submissions cascade.
    ///
    /// Returns whether a row was deleted.
    pub async fn delete(pool: &PgPool, id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM problems WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get test cases for problem in judging order
    pub async fn get_test_cases(pool: &PgPool, problem_id: i32) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"SELECT * FROM test_cases WHERE problem_id = $1 ORDER BY position, id"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }

    /// Replace every test case of a problem atomically
    pub async fn replace_test_cases(
        pool: &PgPool,
        problem_id: i32,
        test_cases: &[NewTestCase],
    ) -> AppResult<Vec<TestCase>> {
        let mut tx = pool.begin().await?;

        sqlx::query(r#"DELETE FROM test_cases WHERE problem_id = $1"#)
            .bind(problem_id)
            .execute(&mut *tx)
            .await?;

        let inserted = Self::insert_test_cases(&mut tx, problem_id, test_cases).await?;

        sqlx::query(r#"UPDATE problems SET updated_at = NOW() WHERE id = $1"#)
            .bind(problem_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(inserted)
    }

    async fn insert_test_cases(
        tx: &mut Transaction<'_, Postgres>,
        problem_id: i32,
        test_cases: &[NewTestCase],
    ) -> AppResult<Vec<TestCase>> {
        let mut inserted = Vec::with_capacity(test_cases.len());

        for (position, test_case) in test_cases.iter().enumerate() {
            let row = sqlx::query_as::<_, TestCase>(
                r#"
                INSERT INTO test_cases (problem_id, input, output, is_sample, position)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(problem_id)
            .bind(&test_case.input)
            .bind(&test_case.output)
            .bind(test_case.is_sample)
            .bind(position as i32)
            .fetch_one(&mut **tx)
            .await?;

            inserted.push(row);
        }

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::TestDb;

    fn case(input: &str, output: &str, is_sample: bool) -> NewTestCase {
        NewTestCase {
            input: input.to_string(),
            output: output.to_string(),
            is_sample,
        }
    }

    #[tokio::test]
    async fn test_replace_test_cases_swaps_whole_set() {
        let Some(db) = TestDb::start().await else { return };
        let admin = db.admin("author").await;
        let problem = db.problem(&admin, "sum", &[("1 1", "2"), ("2 2", "4")]).await;

        let replacement = [case("5 5", "10", true), case("0 0", "0", false), case("9 1", "10", false)];
        let inserted = ProblemRepository::replace_test_cases(&db.pool, problem, &replacement)
            .await
            .unwrap();
        assert_eq!(inserted.len(), 3);

        let stored = ProblemRepository::get_test_cases(&db.pool, problem).await.unwrap();
        let inputs: Vec<_> = stored.iter().map(|tc| tc.input.as_str()).collect();
        assert_eq!(inputs, vec!["5 5", "0 0", "9 1"]);
        let positions: Vec<_> = stored.iter().map(|tc| tc.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert!(stored[0].is_sample && !stored[1].is_sample);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_test_cases() {
        let Some(db) = TestDb::start().await else { return };
        let admin = db.admin("author").await;
        let problem = db.problem(&admin, "gone", &[("x", "x")]).await;

        assert!(ProblemRepository::delete(&db.pool, problem).await.unwrap());
        assert!(ProblemRepository::get_test_cases(&db.pool, problem).await.unwrap().is_empty());
        assert!(!ProblemRepository::delete(&db.pool, problem).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_already_exists() {
        let Some(db) = TestDb::start().await else { return };
        let admin = db.admin("author").await;
        db.problem(&admin, "twice", &[("x", "x")]).await;

        let err = ProblemRepository::create(
            &db.pool,
            &admin,
            NewProblem {
                slug: "twice",
                title: "Twice",
                description: "Again",
                constraints: None,
                difficulty: Difficulty::Hard,
            },
            &[case("x", "x", true)],
        )
        .await
        .unwrap_err();
        assert!(matches!(err, crate::error::AppError::AlreadyExists(_)));
    }
}
