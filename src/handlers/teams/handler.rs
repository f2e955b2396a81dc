//! Team handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{error::AppResult, services::TeamService, state::AppState};

use super::{
    request::RegisterTeamRequest,
    response::{RegisterTeamResponse, TeamResponse},
};

/// Register a new team
pub async fn register_team(
    State(state): State<AppState>,
    Json(payload): Json<RegisterTeamRequest>,
) -> AppResult<(StatusCode, Json<RegisterTeamResponse>)> {
    payload.validate()?;

    let team = TeamService::register(state.db(), payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterTeamResponse {
            message: "Team registered".to_string(),
            team,
        }),
    ))
}

/// Get a registered team
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_name): Path<String>,
) -> AppResult<Json<TeamResponse>> {
    let team = TeamService::get(state.db(), &team_name).await?;
    Ok(Json(team))
}
