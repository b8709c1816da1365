//! In-memory `JudgeStore` for tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        Difficulty, Language, Problem, ProblemWithTestCases, Submission, SubmissionStatus,
        SubmissionWithProblem, TestCase,
    },
};

use super::{JudgeStore, Verdict};

#[derive(Default)]
pub(crate) struct InMemoryStore {
    problems: Mutex<Vec<ProblemWithTestCases>>,
    submissions: Mutex<Vec<Submission>>,
}

impl InMemoryStore {
    /// Add a problem whose test cases are `(input, output)` pairs in order
    pub(crate) fn add_problem(&self, slug: &str, cases: &[(&str, &str)]) -> i32 {
        let mut problems = self.problems.lock().unwrap();
        let id = problems.len() as i32 + 1;
        let now = Utc::now();

        let test_cases = cases
            .iter()
            .enumerate()
            .map(|(position, (input, output))| TestCase {
                id: id * 100 + position as i32,
                problem_id: id,
                input: input.to_string(),
                output: output.to_string(),
                is_sample: position == 0,
                position: position as i32,
                created_at: now,
            })
            .collect();

        problems.push(ProblemWithTestCases {
            problem: Problem {
                id,
                slug: slug.to_string(),
                title: slug.replace('-', " "),
                description: "Test problem".to_string(),
                constraints: None,
                difficulty: Difficulty::Easy,
                admin_id: None,
                created_at: now,
                updated_at: now,
            },
            test_cases,
        });

        id
    }

    pub(crate) fn status_of(&self, id: Uuid) -> Option<SubmissionStatus> {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.status)
    }

    pub(crate) fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub(crate) fn submissions_with_status(&self, status: SubmissionStatus) -> usize {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.status == status)
            .count()
    }
}

#[async_trait]
impl JudgeStore for InMemoryStore {
    async fn find_problem_with_test_cases(
        &self,
        problem_id: i32,
    ) -> AppResult<Option<ProblemWithTestCases>> {
        Ok(self
            .problems
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.problem.id == problem_id)
            .cloned())
    }

    async fn create_pending_submission(
        &self,
        user_id: Uuid,
        problem_id: i32,
        language: Language,
        code: &str,
    ) -> AppResult<Submission> {
        let submission = Submission {
            id: Uuid::new_v4(),
            user_id,
            problem_id,
            language: language.as_str().to_string(),
            code: code.to_string(),
            status: SubmissionStatus::Pending,
            created_at: Utc::now(),
            judged_at: None,
        };
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(submission)
    }

    async fn update_submission_status(
        &self,
        submission_id: Uuid,
        verdict: Verdict,
    ) -> AppResult<Submission> {
        let mut submissions = self.submissions.lock().unwrap();
        let submission = submissions
            .iter_mut()
            .find(|s| s.id == submission_id)
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        if submission.status.is_final() {
            return Err(AppError::Conflict(
                "Submission has already been judged".to_string(),
            ));
        }

        submission.status = verdict.into();
        submission.judged_at = Some(Utc::now());
        Ok(submission.clone())
    }

    async fn list_submissions_for_user(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<SubmissionWithProblem>> {
        let problems = self.problems.lock().unwrap();
        let submissions = self.submissions.lock().unwrap();

        // Insertion order is creation order; newest first
        Ok(submissions
            .iter()
            .rev()
            .filter(|s| s.user_id == user_id)
            .filter_map(|s| {
                let problem = problems.iter().find(|p| p.problem.id == s.problem_id)?;
                Some(SubmissionWithProblem {
                    id: s.id,
                    language: s.language.clone(),
                    status: s.status,
                    created_at: s.created_at,
                    problem_title: problem.problem.title.clone(),
                    problem_slug: problem.problem.slug.clone(),
                })
            })
            .collect())
    }
}
