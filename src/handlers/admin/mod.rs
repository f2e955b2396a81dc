//! Admin handlers: grading and leaderboard repair

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;

/// Admin routes (mounted under `/admin` behind the admin token)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/rounds/{round}/teams/{team_name}/score",
            put(handler::grade_round),
        )
        .route("/leaderboard/recompute", post(handler::recompute_leaderboard))
}
