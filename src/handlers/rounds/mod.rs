//! Round submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::state::AppState;

/// Round routes. Multipart rounds get a raised body limit for file uploads.
pub fn routes(max_upload_bytes: usize) -> Router<AppState> {
    let multipart_rounds = Router::new()
        .route("/round_2", post(handler::submit_round_2))
        .route("/round_3", post(handler::submit_round_3))
        .route("/round_5", post(handler::submit_round_5))
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    Router::new()
        .merge(multipart_rounds)
        .route("/round_4", post(handler::submit_round_4))
}
