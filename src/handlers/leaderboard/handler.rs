//! Leaderboard handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppResult,
    models::RankedTeam,
    services::{LeaderboardService, TeamStanding},
    state::AppState,
};

/// Ranked leaderboard of every registered team
pub async fn get_leaderboard(State(state): State<AppState>) -> AppResult<Json<Vec<RankedTeam>>> {
    let rows = LeaderboardService::list_ranked(state.db()).await?;
    Ok(Json(rows))
}

/// Per-round score breakdown for one team
pub async fn get_team_standing(
    State(state): State<AppState>,
    Path(team_name): Path<String>,
) -> AppResult<Json<TeamStanding>> {
    let standing = LeaderboardService::standing(state.db(), &team_name).await?;
    Ok(Json(standing))
}
