//! Team registration handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Team routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handler::register_team))
        .route("/teams/{team_name}", get(handler::get_team))
}
