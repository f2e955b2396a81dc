//! Admin token middleware
//!
//! Grading and repair routes are guarded by a single shared bearer token from
//! `ADMIN_TOKEN`. When the variable is unset the routes are disabled.

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{error::AppError, state::AppState, utils::secrets_match};

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Admin middleware
pub async fn admin_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.config().admin.token.as_deref() else {
        return Err(AppError::Forbidden(
            "Admin endpoints are disabled".to_string(),
        ));
    };

    let verdict = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .map(|token| secrets_match(token, expected));

    match verdict {
        Some(true) => Ok(next.run(request).await),
        Some(false) => {
            debug!(path = %request.uri().path(), "Admin token mismatch");
            Err(AppError::Unauthorized)
        }
        None => {
            debug!(path = %request.uri().path(), "Missing admin bearer token");
            Err(AppError::Unauthorized)
        }
    }
}
