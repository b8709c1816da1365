//! Admin repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Admin};

/// Repository for admin accounts
pub struct AdminRepository;

impl AdminRepository {
    pub async fn create(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(admin)
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(r#"SELECT * FROM admins WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(admin)
    }

    /// Check that an admin account still exists
    pub async fn exists_by_id(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM admins WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    pub async fn exists(pool: &PgPool, username: &str, email: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM admins WHERE username = $1 OR email = $2)"#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
