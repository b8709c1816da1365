//! Business logic services

pub mod auth_service;
pub mod execution_service;
pub mod problem_service;
pub mod submission_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use execution_service::ExecutionService;
pub use problem_service::ProblemService;
pub use submission_service::SubmissionService;
pub use user_service::UserService;
