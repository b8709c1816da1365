//! Database module
//!
//! This module handles database connections, migrations, and repositories.

pub mod connection;
pub mod judge_store;
pub mod repositories;
#[cfg(test)]
pub(crate) mod test_utils;

use sqlx::PgPool;

pub use connection::*;
pub use judge_store::PgJudgeStore;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
