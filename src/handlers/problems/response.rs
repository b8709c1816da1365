//! Problem response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::{Difficulty, Problem, ProblemWithTestCases},
    services::execution_service::SampleRun,
};

/// Problem list entry
#[derive(Debug, Serialize)]
pub struct ProblemSummary {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
}

impl From<Problem> for ProblemSummary {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id,
            title: problem.title,
            slug: problem.slug,
            difficulty: problem.difficulty,
        }
    }
}

/// All problems
#[derive(Debug, Serialize)]
pub struct ProblemListResponse {
    pub problems: Vec<ProblemSummary>,
}

/// Sample test case shown to participants
#[derive(Debug, Serialize)]
pub struct SampleTestCase {
    pub input: String,
    pub output: String,
}

/// Problem detail; hidden test cases are never included
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetailResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub constraints: Option<String>,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
    pub sample_test_cases: Vec<SampleTestCase>,
}

impl From<ProblemWithTestCases> for ProblemDetailResponse {
    fn from(full: ProblemWithTestCases) -> Self {
        let sample_test_cases = full
            .samples()
            .map(|tc| SampleTestCase {
                input: tc.input.clone(),
                output: tc.output.clone(),
            })
            .collect();
        let problem = full.problem;

        Self {
            id: problem.id,
            title: problem.title,
            slug: problem.slug,
            description: problem.description,
            constraints: problem.constraints,
            difficulty: problem.difficulty,
            created_at: problem.created_at,
            sample_test_cases,
        }
    }
}

/// Result of one sample run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRunResult {
    pub input: String,
    pub expected_output: String,
    pub output: String,
    pub error: String,
    pub exit_code: i32,
    pub passed: bool,
}

impl From<SampleRun> for SampleRunResult {
    fn from(run: SampleRun) -> Self {
        Self {
            input: run.input,
            expected_output: run.expected_output,
            output: run.output.stdout,
            error: run.output.stderr,
            exit_code: run.output.exit_code,
            passed: run.passed,
        }
    }
}

/// Results of running code against every sample
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSamplesResponse {
    pub results: Vec<SampleRunResult>,
    pub all_passed: bool,
}

impl From<Vec<SampleRun>> for RunSamplesResponse {
    fn from(runs: Vec<SampleRun>) -> Self {
        // False when the problem has no samples
        let all_passed = !runs.is_empty() && runs.iter().all(|run| run.passed);
        Self {
            results: runs.into_iter().map(Into::into).collect(),
            all_passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{executor::ExecutionOutput, models::TestCase};

    fn test_case(id: i32, is_sample: bool) -> TestCase {
        TestCase {
            id,
            problem_id: 1,
            input: format!("in{id}"),
            output: format!("out{id}"),
            is_sample,
            position: id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_detail_exposes_samples_only() {
        let now = Utc::now();
        let full = ProblemWithTestCases {
            problem: Problem {
                id: 1,
                slug: "two-sum".to_string(),
                title: "Two Sum".to_string(),
                description: "Add two numbers together.".to_string(),
                constraints: None,
                difficulty: Difficulty::Easy,
                admin_id: None,
                created_at: now,
                updated_at: now,
            },
            test_cases: vec![test_case(1, true), test_case(2, false), test_case(3, true)],
        };

        let detail = ProblemDetailResponse::from(full);
        let inputs: Vec<_> = detail.sample_test_cases.iter().map(|s| s.input.as_str()).collect();
        assert_eq!(inputs, vec!["in1", "in3"]);

        let json = serde_json::to_value(&detail).unwrap();
        assert!(json.get("sampleTestCases").is_some());
        assert!(!json.to_string().contains("out2"));
    }

    #[test]
    fn test_all_passed() {
        let run = |passed| SampleRun {
            input: String::new(),
            expected_output: "1".to_string(),
            output: ExecutionOutput {
                stdout: "1".to_string(),
                stderr: String::new(),
                exit_code: 0,
            },
            passed,
        };

        assert!(RunSamplesResponse::from(vec![run(true), run(true)]).all_passed);
        assert!(!RunSamplesResponse::from(vec![run(true), run(false)]).all_passed);
        assert!(!RunSamplesResponse::from(Vec::new()).all_passed);

        let json = serde_json::to_value(RunSamplesResponse::from(vec![run(true)])).unwrap();
        assert_eq!(json["allPassed"], true);
        assert_eq!(json["results"][0]["expectedOutput"], "1");
        assert_eq!(json["results"][0]["exitCode"], 0);
    }
}
