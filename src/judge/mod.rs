//! Submission judging
//!
//! A judge run is a small state machine:
//! `Pending -> Running(0) -> ... -> Running(n-1) -> Accepted | WrongAnswer | RuntimeError`.
//!
//! Test cases are executed strictly in stored order, one at a time, and the
//! run stops at the first failing case. Execution failures never escape the
//! judge; they become a `Runtime Error` verdict.

#[cfg(test)]
pub(crate) mod memory;
pub mod verdict;

use async_trait::async_trait;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    executor::ExecutionClient,
    models::{Language, ProblemWithTestCases, Submission, SubmissionWithProblem, TestCase},
};

pub use verdict::{CaseOutcome, Verdict, outputs_match};

/// Persistence operations the judge depends on
#[async_trait]
pub trait JudgeStore: Send + Sync {
    /// Problem with its test cases in judging order
    async fn find_problem_with_test_cases(
        &self,
        problem_id: i32,
    ) -> AppResult<Option<ProblemWithTestCases>>;

    /// Insert a submission in `Pending` state
    async fn create_pending_submission(
        &self,
        user_id: Uuid,
        problem_id: i32,
        language: Language,
        code: &str,
    ) -> AppResult<Submission>;

    /// Move a `Pending` submission to its terminal status.
    ///
    /// Fails with `Conflict` if the submission is no longer pending.
    async fn update_submission_status(
        &self,
        submission_id: Uuid,
        verdict: Verdict,
    ) -> AppResult<Submission>;

    /// Submissions of one user, newest first
    async fn list_submissions_for_user(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<SubmissionWithProblem>>;
}

/// One submission to be judged
#[derive(Debug, Clone)]
pub struct JudgeRequest<'a> {
    pub user_id: Uuid,
    pub problem_id: i32,
    pub language: Language,
    pub code: &'a str,
}

/// Result of evaluating code against a list of test cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: Verdict,
    /// Number of test cases dispatched to the executor
    pub cases_run: usize,
    /// Index of the first failing test case
    pub failed_case: Option<usize>,
}

/// Final result of a judge run
#[derive(Debug, Clone)]
pub struct JudgeOutcome {
    pub submission: Submission,
    pub verdict: Verdict,
    pub cases_run: usize,
}

/// Orchestrates one submission against the store and the executor
pub struct Judge<'a> {
    store: &'a dyn JudgeStore,
    executor: &'a dyn ExecutionClient,
}

impl<'a> Judge<'a> {
    pub fn new(store: &'a dyn JudgeStore, executor: &'a dyn ExecutionClient) -> Self {
        Self { store, executor }
    }

    /// Judge a submission end to end.
    ///
    /// Problem lookup and submission creation errors are returned to the
    /// caller; nothing is created when the problem does not exist.
    pub async fn judge(&self, request: JudgeRequest<'_>) -> AppResult<JudgeOutcome> {
        let problem = self
            .store
            .find_problem_with_test_cases(request.problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let submission = self
            .store
            .create_pending_submission(
                request.user_id,
                request.problem_id,
                request.language,
                request.code,
            )
            .await?;

        let span = tracing::info_span!(
            "judge",
            submission_id = %submission.id,
            problem_id = request.problem_id,
            language = %request.language,
        );

        let evaluation = evaluate(
            self.executor,
            request.language,
            request.code,
            &problem.test_cases,
        )
        .instrument(span.clone())
        .await;

        let submission = self
            .store
            .update_submission_status(submission.id, evaluation.verdict)
            .await?;

        span.in_scope(|| {
            tracing::info!(
                verdict = %evaluation.verdict,
                cases_run = evaluation.cases_run,
                total_cases = problem.test_cases.len(),
                failed_case = ?evaluation.failed_case,
                "Submission judged"
            );
        });

        Ok(JudgeOutcome {
            submission,
            verdict: evaluation.verdict,
            cases_run: evaluation.cases_run,
        })
    }
}

/// Run `code` against `test_cases` in order, stopping at the first failure
pub async fn evaluate(
    executor: &dyn ExecutionClient,
    language: Language,
    code: &str,
    test_cases: &[TestCase],
) -> Evaluation {
    for (index, test_case) in test_cases.iter().enumerate() {
        tracing::debug!(case = index, test_case_id = test_case.id, "Running test case");

        let outcome = run_case(executor, language, code, test_case).await;
        if let Some(verdict) = outcome.failure() {
            return Evaluation {
                verdict,
                cases_run: index + 1,
                failed_case: Some(index),
            };
        }
    }

    Evaluation {
        verdict: Verdict::Accepted,
        cases_run: test_cases.len(),
        failed_case: None,
    }
}

/// Execute a single test case and classify the result
pub async fn run_case(
    executor: &dyn ExecutionClient,
    language: Language,
    code: &str,
    test_case: &TestCase,
) -> CaseOutcome {
    match executor.execute(language, code, &test_case.input).await {
        Ok(output) => {
            if !output.succeeded() {
                tracing::info!(
                    test_case_id = test_case.id,
                    exit_code = output.exit_code,
                    stderr = %output.stderr,
                    "Runtime error"
                );
            }
            CaseOutcome::classify(&output, &test_case.output)
        }
        Err(e) => {
            tracing::warn!(test_case_id = test_case.id, error = %e, "Execution service failed");
            CaseOutcome::RuntimeError
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::memory::InMemoryStore;
    use super::*;
    use crate::{
        executor::{ExecutionError, ExecutionOutput, MockExecutionClient},
        models::SubmissionStatus,
    };

    fn ok(stdout: &str) -> Result<ExecutionOutput, ExecutionError> {
        Ok(ExecutionOutput {
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code: 0,
        })
    }

    fn crash(stderr: &str) -> Result<ExecutionOutput, ExecutionError> {
        Ok(ExecutionOutput {
            stdout: String::new(),
            stderr: stderr.to_string(),
            exit_code: 1,
        })
    }

    fn request(problem_id: i32, code: &str) -> JudgeRequest<'_> {
        JudgeRequest {
            user_id: Uuid::new_v4(),
            problem_id,
            language: Language::Python,
            code,
        }
    }

    /// Store holding the "Two Sum"-style problem: `1 2 5\n11 -> 3`, plus extra cases
    fn two_sum_store(extra_cases: &[(&str, &str)]) -> (Arc<InMemoryStore>, i32) {
        let store = Arc::new(InMemoryStore::default());
        let mut cases = vec![("1 2 5\n11", "3")];
        cases.extend_from_slice(extra_cases);
        let problem_id = store.add_problem("two-sum", &cases);
        (store, problem_id)
    }

    #[tokio::test]
    async fn test_scenario_a_accepted() {
        let (store, problem_id) = two_sum_store(&[]);
        let mut executor = MockExecutionClient::new();
        executor
            .expect_execute()
            .times(1)
            .returning(|_, _, stdin| {
                assert_eq!(stdin, "1 2 5\n11");
                ok("3\n")
            });

        let judge = Judge::new(store.as_ref(), &executor);
        let outcome = judge.judge(request(problem_id, "print(3)")).await.unwrap();

        assert_eq!(outcome.verdict, Verdict::Accepted);
        assert_eq!(outcome.submission.status, SubmissionStatus::Accepted);
        assert_eq!(outcome.cases_run, 1);
    }

    #[tokio::test]
    async fn test_scenario_b_wrong_answer() {
        let (store, problem_id) = two_sum_store(&[]);
        let mut executor = MockExecutionClient::new();
        executor.expect_execute().times(1).returning(|_, _, _| ok("4"));

        let judge = Judge::new(store.as_ref(), &executor);
        let outcome = judge.judge(request(problem_id, "print(4)")).await.unwrap();

        assert_eq!(outcome.verdict, Verdict::WrongAnswer);
        assert_eq!(
            store.status_of(outcome.submission.id),
            Some(SubmissionStatus::WrongAnswer)
        );
    }

    #[tokio::test]
    async fn test_scenario_c_runtime_error_short_circuits() {
        let (store, problem_id) = two_sum_store(&[("2 3", "5"), ("4 4", "8")]);
        let mut executor = MockExecutionClient::new();
        // Only the first case may be executed
        executor
            .expect_execute()
            .times(1)
            .returning(|_, _, _| crash("ZeroDivisionError"));

        let judge = Judge::new(store.as_ref(), &executor);
        let outcome = judge.judge(request(problem_id, "1/0")).await.unwrap();

        assert_eq!(outcome.verdict, Verdict::RuntimeError);
        assert_eq!(outcome.cases_run, 1);
    }

    #[tokio::test]
    async fn test_all_cases_pass_in_order() {
        let (store, problem_id) = two_sum_store(&[("2 3", "5"), ("4 4", "8")]);
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let recorder = seen.clone();

        let mut executor = MockExecutionClient::new();
        executor.expect_execute().times(3).returning(move |_, _, stdin| {
            recorder.lock().unwrap().push(stdin.to_string());
            match stdin {
                "1 2 5\n11" => ok("3"),
                "2 3" => ok("5\n"),
                _ => ok("  8  "),
            }
        });

        let judge = Judge::new(store.as_ref(), &executor);
        let outcome = judge.judge(request(problem_id, "solve()")).await.unwrap();

        assert_eq!(outcome.verdict, Verdict::Accepted);
        assert_eq!(outcome.cases_run, 3);
        assert_eq!(*seen.lock().unwrap(), vec!["1 2 5\n11", "2 3", "4 4"]);
    }

    #[tokio::test]
    async fn test_wrong_answer_on_second_case_stops_iteration() {
        let (store, problem_id) = two_sum_store(&[("2 3", "5"), ("4 4", "8")]);
        let mut executor = MockExecutionClient::new();
        executor.expect_execute().times(2).returning(|_, _, stdin| match stdin {
            "1 2 5\n11" => ok("3"),
            _ => ok("6"),
        });

        let judge = Judge::new(store.as_ref(), &executor);
        let outcome = judge.judge(request(problem_id, "solve()")).await.unwrap();

        assert_eq!(outcome.verdict, Verdict::WrongAnswer);
        assert_eq!(outcome.cases_run, 2);
    }

    #[tokio::test]
    async fn test_executor_failure_becomes_runtime_error() {
        let (store, problem_id) = two_sum_store(&[("2 3", "5")]);
        let mut executor = MockExecutionClient::new();
        executor
            .expect_execute()
            .times(1)
            .returning(|_, _, _| Err(ExecutionError::Transport("connection reset".to_string())));

        let judge = Judge::new(store.as_ref(), &executor);
        let outcome = judge.judge(request(problem_id, "print(3)")).await.unwrap();

        assert_eq!(outcome.verdict, Verdict::RuntimeError);
        assert_eq!(
            store.status_of(outcome.submission.id),
            Some(SubmissionStatus::RuntimeError)
        );
    }

    #[tokio::test]
    async fn test_scenario_e_unknown_problem_creates_nothing() {
        let store = InMemoryStore::default();
        // No expectations: any executor call fails the test
        let executor = MockExecutionClient::new();

        let judge = Judge::new(&store, &executor);
        let err = judge.judge(request(404, "print(3)")).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_submission_is_pending_while_cases_run() {
        let (store, problem_id) = two_sum_store(&[]);
        let observer = store.clone();

        let mut executor = MockExecutionClient::new();
        executor.expect_execute().times(1).returning(move |_, _, _| {
            let pending = observer.submissions_with_status(SubmissionStatus::Pending);
            assert_eq!(pending, 1);
            ok("3")
        });

        let judge = Judge::new(store.as_ref(), &executor);
        judge.judge(request(problem_id, "print(3)")).await.unwrap();

        assert_eq!(store.submissions_with_status(SubmissionStatus::Pending), 0);
    }

    #[tokio::test]
    async fn test_terminal_status_is_stable() {
        let (store, problem_id) = two_sum_store(&[]);
        let mut executor = MockExecutionClient::new();
        executor.expect_execute().times(1).returning(|_, _, _| ok("3"));

        let judge = Judge::new(store.as_ref(), &executor);
        let outcome = judge.judge(request(problem_id, "print(3)")).await.unwrap();
        let id = outcome.submission.id;

        for _ in 0..3 {
            assert_eq!(store.status_of(id), Some(SubmissionStatus::Accepted));
        }

        // A second transition is refused and leaves the status untouched
        let err = store
            .update_submission_status(id, Verdict::WrongAnswer)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.status_of(id), Some(SubmissionStatus::Accepted));
    }

    #[tokio::test]
    async fn test_resubmission_creates_new_row() {
        let (store, problem_id) = two_sum_store(&[]);
        let mut executor = MockExecutionClient::new();
        executor.expect_execute().times(2).returning(|_, _, _| ok("3"));

        let judge = Judge::new(store.as_ref(), &executor);
        let user_id = Uuid::new_v4();
        let first = judge
            .judge(JudgeRequest { user_id, ..request(problem_id, "print(3)") })
            .await
            .unwrap();
        let second = judge
            .judge(JudgeRequest { user_id, ..request(problem_id, "print(3)") })
            .await
            .unwrap();

        assert_ne!(first.submission.id, second.submission.id);
        assert_eq!(store.submission_count(), 2);

        let history = store.list_submissions_for_user(user_id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.submission.id);
    }

    #[tokio::test]
    async fn test_problem_without_test_cases_is_accepted() {
        let store = InMemoryStore::default();
        let problem_id = store.add_problem("empty", &[]);
        let executor = MockExecutionClient::new();

        let judge = Judge::new(&store, &executor);
        let outcome = judge.judge(request(problem_id, "pass")).await.unwrap();

        assert_eq!(outcome.verdict, Verdict::Accepted);
        assert_eq!(outcome.cases_run, 0);
    }

    #[tokio::test]
    async fn test_evaluate_reports_failed_case_index() {
        let (store, problem_id) = two_sum_store(&[("2 3", "5")]);
        let problem = store
            .find_problem_with_test_cases(problem_id)
            .await
            .unwrap()
            .unwrap();

        let mut executor = MockExecutionClient::new();
        executor.expect_execute().times(2).returning(|_, _, stdin| match stdin {
            "2 3" => crash("segfault"),
            _ => ok("3"),
        });

        let evaluation = evaluate(&executor, Language::Cpp, "int main(){}", &problem.test_cases).await;
        assert_eq!(
            evaluation,
            Evaluation {
                verdict: Verdict::RuntimeError,
                cases_run: 2,
                failed_case: Some(1),
            }
        );
    }
}
