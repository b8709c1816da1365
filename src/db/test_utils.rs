//! Postgres test database backed by testcontainers
//!
//! Every [`TestDb::start`] runs a fresh container with migrations applied.
//! Without a reachable Docker daemon it returns `None` and the calling test
//! ends early.

use sqlx::PgPool;
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use uuid::Uuid;

use crate::{
    db::repositories::{AdminRepository, NewProblem, ProblemRepository, UserRepository},
    models::{Difficulty, NewTestCase},
};

pub(crate) struct TestDb {
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestDb {
    pub(crate) async fn start() -> Option<Self> {
        let container = match Postgres::default().with_tag("16-alpine").start().await {
            Ok(container) => container,
            Err(e) => {
                eprintln!("Postgres container unavailable, skipping: {e}");
                return None;
            }
        };

        let host = container.get_host().await.expect("container host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("container port");
        let url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to connect to test database");
        super::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Some(Self {
            pool,
            _container: container,
        })
    }

    pub(crate) async fn user(&self, username: &str) -> Uuid {
        UserRepository::create(&self.pool, username, &format!("{username}@example.com"), "hash")
            .await
            .unwrap()
            .id
    }

    pub(crate) async fn admin(&self, username: &str) -> Uuid {
        AdminRepository::create(&self.pool, username, &format!("{username}@example.com"), "hash")
            .await
            .unwrap()
            .id
    }

    /// Problem whose test cases are `(input, output)` pairs; the first is a sample
    pub(crate) async fn problem(&self, admin_id: &Uuid, slug: &str, cases: &[(&str, &str)]) -> i32 {
        let test_cases: Vec<NewTestCase> = cases
            .iter()
            .enumerate()
            .map(|(i, (input, output))| NewTestCase {
                input: input.to_string(),
                output: output.to_string(),
                is_sample: i == 0,
            })
            .collect();

        ProblemRepository::create(
            &self.pool,
            admin_id,
            NewProblem {
                slug,
                title: slug,
                description: "Test problem",
                constraints: None,
                difficulty: Difficulty::Easy,
            },
            &test_cases,
        )
        .await
        .unwrap()
        .problem
        .id
    }
}
