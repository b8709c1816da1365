//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::TestCase;

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub constraints: Option<String>,
    pub difficulty: Difficulty,
    pub admin_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A problem together with its test cases in stored order
#[derive(Debug, Clone)]
pub struct ProblemWithTestCases {
    pub problem: Problem,
    pub test_cases: Vec<TestCase>,
}

impl ProblemWithTestCases {
    /// Test cases that may be shown to participants
    pub fn samples(&self) -> impl Iterator<Item = &TestCase> {
        self.test_cases.iter().filter(|tc| tc.is_sample)
    }
}

/// Problem difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "problem_difficulty")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}
