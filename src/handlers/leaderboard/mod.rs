//! Leaderboard handlers

mod handler;

pub use handler::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Leaderboard routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(handler::get_leaderboard))
        .route("/leaderboard/{team_name}", get(handler::get_team_standing))
}
