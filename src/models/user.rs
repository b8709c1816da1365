//! User and admin models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User database model (problem solver)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Admin database model (problem author)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Admin {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Submission counts for one user
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct UserStats {
    pub total_submissions: i64,
    pub accepted: i64,
    pub wrong_answer: i64,
    pub runtime_error: i64,
    pub pending: i64,
    pub solved_problems: i64,
}
