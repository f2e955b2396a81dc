//! Request logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, header::CONTENT_LENGTH},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// How a finished request should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Ok,
    ClientError,
    ServerError,
}

impl Outcome {
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::ServerError
        } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
            // 404s are routine for leaderboard lookups of unknown teams
            Self::ClientError
        } else {
            Self::Ok
        }
    }
}

/// One structured event per request: method, path, status, request size and
/// latency. Upload routes carry large bodies, so the declared length is logged.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_bytes = request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    match Outcome::of(status) {
        Outcome::ServerError => warn!(
            %method,
            %path,
            status = status.as_u16(),
            request_bytes,
            %duration_ms,
            "Request failed with server error"
        ),
        Outcome::ClientError => warn!(
            %method,
            %path,
            status = status.as_u16(),
            request_bytes,
            %duration_ms,
            "Request rejected"
        ),
        Outcome::Ok => info!(
            %method,
            %path,
            status = status.as_u16(),
            request_bytes,
            %duration_ms,
            "Request completed"
        ),
    }

    response
}
