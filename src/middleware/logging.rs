//! Request logging middleware

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{debug, info, warn};

/// Log method, path, status and latency of every request
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if response.status().is_server_error() {
        warn!(%method, %path, status, %duration_ms, "Request failed");
    } else if response.status().is_client_error() {
        info!(%method, %path, status, %duration_ms, "Request rejected");
    } else if path.ends_with("/health") || path.ends_with("/health/ready") {
        // Liveness probes log at debug
        debug!(%method, %path, status, %duration_ms, "Request completed");
    } else {
        info!(%method, %path, status, %duration_ms, "Request completed");
    }

    response
}
