//! Bulk image upload handlers

mod handler;

pub use handler::*;

use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::state::AppState;

/// Upload routes
pub fn routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/upload-multiple/", post(handler::upload_multiple))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
