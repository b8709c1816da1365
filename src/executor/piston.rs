//! Piston execution client
//!
//! Talks to a Piston-compatible `execute` endpoint:
//! request `{language, version, files:[{content}], stdin}`,
//! response `{run:{stdout, stderr, code, signal}, compile?:{...}}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{config::ExecutorConfig, constants::SIGNALLED_EXIT_CODE, models::Language};

use super::{ExecutionClient, ExecutionError, ExecutionOutput};

/// HTTP client for a Piston execute endpoint
#[derive(Debug, Clone)]
pub struct PistonClient {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize)]
struct ExecuteRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: [SourceFile<'a>; 1],
    stdin: &'a str,
}

#[derive(Debug, Serialize)]
struct SourceFile<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ExecuteResponse {
    run: Option<Stage>,
    compile: Option<Stage>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Stage {
    #[serde(default)]
    stdout: String,
    #[serde(default)]
    stderr: String,
    code: Option<i32>,
    signal: Option<String>,
}

impl Stage {
    fn into_output(self) -> ExecutionOutput {
        if let Some(signal) = &self.signal {
            tracing::debug!(signal = %signal, "Executor stage terminated by signal");
        }

        ExecutionOutput {
            stdout: self.stdout,
            stderr: self.stderr,
            exit_code: self.code.unwrap_or(SIGNALLED_EXIT_CODE),
        }
    }
}

impl PistonClient {
    /// Create a client from executor configuration
    pub fn new(config: &ExecutorConfig) -> Result<Self, ExecutionError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ExecutionError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Endpoint this client posts to
    pub fn url(&self) -> &str {
        &self.url
    }

    fn interpret(response: ExecuteResponse) -> Result<ExecutionOutput, ExecutionError> {
        // A failed compile stage means the run stage never happened (or is meaningless)
        if let Some(compile) = response.compile {
            if compile.code.unwrap_or(SIGNALLED_EXIT_CODE) != 0 {
                return Ok(compile.into_output());
            }
        }

        match response.run {
            Some(run) => Ok(run.into_output()),
            None => Err(ExecutionError::MalformedResponse(
                response
                    .message
                    .unwrap_or_else(|| "missing `run` stage".to_string()),
            )),
        }
    }
}

#[async_trait]
impl ExecutionClient for PistonClient {
    async fn execute(
        &self,
        language: Language,
        source: &str,
        stdin: &str,
    ) -> Result<ExecutionOutput, ExecutionError> {
        let (runtime, version) = language.runtime();
        let body = ExecuteRequest {
            language: runtime,
            version,
            files: [SourceFile { content: source }],
            stdin,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExecutionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExecutionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ExecuteResponse = response
            .json()
            .await
            .map_err(|e| ExecutionError::MalformedResponse(e.to_string()))?;

        Self::interpret(parsed)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    use super::*;

    #[derive(Clone)]
    struct FakeExecutor {
        status: StatusCode,
        reply: Value,
        requests: Arc<Mutex<Vec<Value>>>,
    }

    async fn execute_handler(
        State(state): State<FakeExecutor>,
        Json(payload): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        state.requests.lock().unwrap().push(payload);
        (state.status, Json(state.reply.clone()))
    }

    async fn start_fake(status: StatusCode, reply: Value) -> (PistonClient, Arc<Mutex<Vec<Value>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeExecutor {
            status,
            reply,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/api/v2/piston/execute", post(execute_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = PistonClient::new(&ExecutorConfig {
            url: format!("http://{}/api/v2/piston/execute", addr),
            timeout_seconds: 5,
        })
        .unwrap();

        (client, requests)
    }

    #[tokio::test]
    async fn test_sends_pinned_runtime_and_stdin() {
        let (client, requests) = start_fake(
            StatusCode::OK,
            json!({"run": {"stdout": "3\n", "stderr": "", "code": 0, "signal": null}}),
        )
        .await;

        let output = client
            .execute(Language::Cpp, "int main(){}", "1 2 5\n11")
            .await
            .unwrap();

        assert_eq!(output.stdout, "3\n");
        assert_eq!(output.exit_code, 0);
        assert!(output.succeeded());

        let recorded = requests.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0]["language"], "c++");
        assert_eq!(recorded[0]["version"], "10.2.0");
        assert_eq!(recorded[0]["files"][0]["content"], "int main(){}");
        assert_eq!(recorded[0]["stdin"], "1 2 5\n11");
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_returned_not_raised() {
        let (client, _) = start_fake(
            StatusCode::OK,
            json!({"run": {"stdout": "", "stderr": "Traceback", "code": 1, "signal": null}}),
        )
        .await;

        let output = client.execute(Language::Python, "raise", "").await.unwrap();
        assert_eq!(output.exit_code, 1);
        assert_eq!(output.stderr, "Traceback");
    }

    #[tokio::test]
    async fn test_signal_without_code_maps_to_failure() {
        let (client, _) = start_fake(
            StatusCode::OK,
            json!({"run": {"stdout": "", "stderr": "", "code": null, "signal": "SIGKILL"}}),
        )
        .await;

        let output = client.execute(Language::Java, "class Main {}", "").await.unwrap();
        assert_eq!(output.exit_code, SIGNALLED_EXIT_CODE);
        assert!(!output.succeeded());
    }

    #[tokio::test]
    async fn test_compile_failure_surfaces_as_exit_code() {
        let (client, _) = start_fake(
            StatusCode::OK,
            json!({
                "compile": {"stdout": "", "stderr": "error: expected ';'", "code": 1, "signal": null},
                "run": {"stdout": "", "stderr": "", "code": 0, "signal": null}
            }),
        )
        .await;

        let output = client.execute(Language::Cpp, "int main(", "").await.unwrap();
        assert_eq!(output.exit_code, 1);
        assert_eq!(output.stderr, "error: expected ';'");
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let (client, _) = start_fake(
            StatusCode::BAD_REQUEST,
            json!({"message": "runtime is unknown"}),
        )
        .await;

        let err = client.execute(Language::JavaScript, "", "").await.unwrap_err();
        assert!(matches!(err, ExecutionError::Status { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_missing_run_stage_is_malformed() {
        let (client, _) = start_fake(StatusCode::OK, json!({"language": "python"})).await;

        let err = client.execute(Language::Python, "", "").await.unwrap_err();
        assert!(matches!(err, ExecutionError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_executor_is_transport_error() {
        // Bind then drop to obtain a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = PistonClient::new(&ExecutorConfig {
            url: format!("http://{}/execute", addr),
            timeout_seconds: 2,
        })
        .unwrap();

        let err = client.execute(Language::Python, "", "").await.unwrap_err();
        assert!(matches!(err, ExecutionError::Transport(_)));
    }
}
