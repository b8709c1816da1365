//! Test case model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Test case database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub id: i32,
    pub problem_id: i32,
    pub input: String,
    pub output: String,
    pub is_sample: bool,
    /// Position within the problem (judging order)
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// A test case to be inserted (no identity yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestCase {
    pub input: String,
    pub output: String,
    pub is_sample: bool,
}
