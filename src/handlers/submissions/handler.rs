//! Submission handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{error::AppResult, services::SubmissionService, state::AppState};

use super::{request::CreateSubmissionRequest, response::CreateSubmissionResponse};

/// Record a code submission
pub async fn create_submission(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<CreateSubmissionResponse>)> {
    payload.validate()?;

    let submission = SubmissionService::create_submission(state.db(), payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSubmissionResponse {
            message: "Submission created".to_string(),
            submission_id: submission.submission_id,
        }),
    ))
}
