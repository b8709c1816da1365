//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{User, UserStats},
};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email (for login)
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Check if a username or email is already registered
    pub async fn exists(pool: &PgPool, username: &str, email: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 OR email = $2)"#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Submission counts by status for one user
    pub async fn stats(pool: &PgPool, id: &Uuid) -> AppResult<UserStats> {
        let stats = sqlx::query_as::<_, UserStats>(
            r#"
            SELECT
                COUNT(*) AS total_submissions,
                COUNT(*) FILTER (WHERE status = 'Accepted') AS accepted,
                COUNT(*) FILTER (WHERE status = 'Wrong Answer') AS wrong_answer,
                COUNT(*) FILTER (WHERE status = 'Runtime Error') AS runtime_error,
                COUNT(*) FILTER (WHERE status = 'Pending') AS pending,
                COUNT(DISTINCT problem_id) FILTER (WHERE status = 'Accepted') AS solved_problems
            FROM submissions
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(stats)
    }
}
