//! Problem handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{error::AppResult, services::ProblemService, state::AppState};

use super::{
    request::CreateProblemRequest,
    response::{CreateProblemResponse, ProblemResponse},
};

/// Create a problem in an existing contest
pub async fn create_problem(
    State(state): State<AppState>,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<CreateProblemResponse>)> {
    payload.validate()?;

    let problem = ProblemService::create_problem(state.db(), payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateProblemResponse {
            message: "Problem created successfully".to_string(),
            problem_id: problem.problem_id,
        }),
    ))
}

/// Get a problem by id
pub async fn get_problem(
    State(state): State<AppState>,
    Path(problem_id): Path<i32>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = ProblemService::get_problem(state.db(), problem_id).await?;
    Ok(Json(problem))
}
