//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod admin_repo;
pub mod problem_repo;
pub mod submission_repo;
pub mod user_repo;

pub use admin_repo::AdminRepository;
pub use problem_repo::{NewProblem, ProblemChanges, ProblemRepository};
pub use submission_repo::SubmissionRepository;
pub use user_repo::UserRepository;
