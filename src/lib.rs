//! Contestboard - Contest Registration and Scoring Backend
//!
//! This library provides the core functionality for a multi-round contest:
//! teams register, submit artifacts for rounds 2 to 5, and are ranked on a
//! leaderboard that sums their round scores.
//!
//! # Features
//!
//! - Team registration with member rosters
//! - Multipart round submissions with files forwarded to an asset host
//! - Resubmission replaces a team's previous entry for that round
//! - Leaderboard recomputed in the same transaction as every round write
//! - Admin grading and leaderboard repair behind a bearer token
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//! - **Storage**: Asset host client behind the [`storage::AssetUploader`] trait

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware::from_fn};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router with all middleware layers
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new().merge(handlers::routes(&state));
    with_layers(routes, state.config()).with_state(state)
}

/// Wrap routes in the shared middleware stack. A request that outlives
/// `request_timeout_secs` is answered with 408.
fn with_layers(routes: Router<AppState>, config: &Config) -> Router<AppState> {
    let timeout = Duration::from_secs(config.server.request_timeout_secs);
    let max_body_bytes = config.uploads.max_body_bytes;

    routes
        .layer(from_fn(middleware::logging_middleware))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::storage::MockAssetUploader;

    const BOUNDARY: &str = "contestboard-test-boundary";

    /// Router over a pool that never connects; only paths that fail before
    /// touching the database can be exercised here.
    fn app(uploader: MockAssetUploader, admin_token: Option<&str>) -> Router {
        let mut config = Config::with_database_url("postgres://localhost/contestboard_test");
        config.admin.token = admin_token.map(String::from);

        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database.url)
            .unwrap();

        create_router(AppState::new(pool, Arc::new(uploader), config))
    }

    fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str)]) -> String {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        for (file_name, content_type) in files {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\ndata\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    fn multipart_request(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(MockAssetUploader::new(), None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_bulk_upload_rejects_non_image_without_uploading() {
        let mut uploader = MockAssetUploader::new();
        uploader.expect_upload().times(0);

        let body = multipart_body(&[], &[("a.png", "image/png"), ("notes.txt", "text/plain")]);
        let response = app(uploader, None)
            .oneshot(multipart_request("/upload-multiple/", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_bulk_upload_returns_urls() {
        let mut uploader = MockAssetUploader::new();
        uploader
            .expect_upload()
            .times(2)
            .returning(|f| Ok(format!("https://cdn.test/{}", f.display_name())));

        let body = multipart_body(&[], &[("a.png", "image/png"), ("b.jpg", "image/jpeg")]);
        let response = app(uploader, None)
            .oneshot(multipart_request("/upload-multiple/", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["message"], "All uploads successful");
        assert_eq!(json["images"][1], "https://cdn.test/b.jpg");
    }

    #[tokio::test]
    async fn test_round_with_empty_team_name_is_rejected_before_upload() {
        let mut uploader = MockAssetUploader::new();
        uploader.expect_upload().times(0);

        let body = multipart_body(
            &[
                ("Team_Name", "   "),
                ("figma_links", "https://figma.com/file/abc"),
                ("description", "Dashboard"),
            ],
            &[("shot.png", "image/png")],
        );
        let response = app(uploader, None)
            .oneshot(multipart_request("/round_3", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_round_missing_field() {
        let body = multipart_body(&[("Team_Name", "Alpha")], &[]);
        let response = app(MockAssetUploader::new(), None)
            .oneshot(multipart_request("/round_2", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert!(
            json["error"]["message"]
                .as_str()
                .unwrap()
                .contains("git_hub_link")
        );
    }

    #[tokio::test]
    async fn test_round_4_empty_team_name() {
        let request = Request::post("/round_4")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"Team_Name": "", "structured_submission": "{}", "score_4": 3}"#,
            ))
            .unwrap();

        let response = app(MockAssetUploader::new(), None)
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_disabled_without_token() {
        let response = app(MockAssetUploader::new(), None)
            .oneshot(
                Request::post("/admin/leaderboard/recompute")
                    .header(header::AUTHORIZATION, "Bearer anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_rejects_wrong_token() {
        let router = app(MockAssetUploader::new(), Some("s3cret"));

        let response = router
            .clone()
            .oneshot(
                Request::post("/admin/leaderboard/recompute")
                    .header(header::AUTHORIZATION, "Bearer wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = router
            .oneshot(
                Request::post("/admin/leaderboard/recompute")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_slow_request_times_out_with_408() {
        let mut config = Config::with_database_url("postgres://localhost/contestboard_test");
        config.server.request_timeout_secs = 1;
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database.url)
            .unwrap();

        let routes = Router::new().route(
            "/slow",
            axum::routing::get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done"
            }),
        );
        let router = with_layers(routes, &config).with_state(AppState::new(
            pool,
            Arc::new(MockAssetUploader::new()),
            config.clone(),
        ));

        let response = router
            .oneshot(Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_blank_path_team_name_is_rejected() {
        let router = app(MockAssetUploader::new(), Some("s3cret"));

        for uri in ["/teams/%20%20", "/leaderboard/%20"] {
            let response = router
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
        }

        let request = Request::put("/admin/rounds/3/teams/%20/score")
            .header(header::AUTHORIZATION, "Bearer s3cret")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"score": 10}"#))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_round_is_invalid_input() {
        let request = Request::put("/admin/rounds/7/teams/Alpha/score")
            .header(header::AUTHORIZATION, "Bearer s3cret")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"score": 10}"#))
            .unwrap();

        let response = app(MockAssetUploader::new(), Some("s3cret"))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "INVALID_INPUT");
    }
}
