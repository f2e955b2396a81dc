//! Service banner and health check handlers

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::{db, state::AppState};

/// Routes listed by the banner
const PUBLIC_ROUTES: &[&str] = &[
    "/register",
    "/round_2",
    "/round_3",
    "/round_4",
    "/round_5",
    "/leaderboard",
    "/submit",
    "/problem/{id}",
];

/// Service banner
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub version: String,
    pub routes: Vec<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Contestboard API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        routes: PUBLIC_ROUTES.iter().map(|r| r.to_string()).collect(),
    })
}

/// Liveness: the process is up
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness: the database answers
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = match db::ping(state.db()).await {
        Ok(()) => (StatusCode::OK, "ready"),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
}
