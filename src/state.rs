//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{config::Config, db::PgJudgeStore, executor::ExecutionClient};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Judge store over the same pool
    judge_store: PgJudgeStore,

    /// Remote code execution client
    executor: Arc<dyn ExecutionClient>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, executor: Arc<dyn ExecutionClient>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                judge_store: PgJudgeStore::new(db.clone()),
                db,
                executor,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get the judge store
    pub fn judge_store(&self) -> &PgJudgeStore {
        &self.inner.judge_store
    }

    /// Get the execution client
    pub fn executor(&self) -> &dyn ExecutionClient {
        self.inner.executor.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
