//! Admin handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Round,
    services::{LeaderboardService, RoundService},
    state::AppState,
};

use super::{
    request::GradeRoundRequest,
    response::{GradeRoundResponse, RecomputeResponse},
};

/// Set the score of a team's round submission
pub async fn grade_round(
    State(state): State<AppState>,
    Path((round, team_name)): Path<(u8, String)>,
    Json(payload): Json<GradeRoundRequest>,
) -> AppResult<Json<GradeRoundResponse>> {
    payload.validate()?;

    let round = Round::try_from(round).map_err(AppError::InvalidInput)?;

    let receipt = RoundService::grade(
        state.db(),
        round,
        &team_name,
        payload.score,
        payload.feedback.as_deref(),
    )
    .await?;

    Ok(Json(GradeRoundResponse {
        message: "Score updated".to_string(),
        receipt,
    }))
}

/// Recompute every team's leaderboard entry
pub async fn recompute_leaderboard(
    State(state): State<AppState>,
) -> AppResult<Json<RecomputeResponse>> {
    let teams_updated = LeaderboardService::recompute_all(state.db()).await?;

    Ok(Json(RecomputeResponse {
        message: "Leaderboard recomputed".to_string(),
        teams_updated,
    }))
}
