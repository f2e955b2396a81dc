//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod contests;
pub mod health;
pub mod leaderboard;
pub mod problems;
pub mod rounds;
pub mod submissions;
pub mod teams;
pub mod uploads;

use axum::{Router, middleware};

use crate::{middleware::admin_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: &AppState) -> Router<AppState> {
    let max_upload_bytes = state.config().uploads.max_body_bytes;

    Router::new()
        .merge(health::routes())
        .merge(teams::routes())
        .merge(rounds::routes(max_upload_bytes))
        .merge(leaderboard::routes())
        .merge(uploads::routes(max_upload_bytes))
        .merge(contests::routes())
        .merge(problems::routes())
        .merge(submissions::routes())
        .nest(
            "/admin",
            admin::routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                admin_middleware,
            )),
        )
}
