//! Contest handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{error::AppResult, services::ContestService, state::AppState};

use super::{request::CreateContestRequest, response::ContestResponse};

/// Create a new contest
pub async fn create_contest(
    State(state): State<AppState>,
    Json(payload): Json<CreateContestRequest>,
) -> AppResult<(StatusCode, Json<ContestResponse>)> {
    payload.validate()?;

    let contest = ContestService::create_contest(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(contest)))
}
