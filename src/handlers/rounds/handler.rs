//! Round handler implementations

use axum::{
    Json,
    extract::{Multipart, State},
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::Round,
    services::RoundService,
    state::AppState,
};

use super::{
    request::{MultipartForm, Round4Request},
    response::RoundSubmissionResponse,
};

async fn submit_multipart(
    state: AppState,
    round: Round,
    multipart: Multipart,
) -> AppResult<Json<RoundSubmissionResponse>> {
    let submission = MultipartForm::from_multipart(multipart)
        .await?
        .into_submission(round)?;

    let receipt = RoundService::submit(
        state.db(),
        state.uploader(),
        &submission.team_name,
        submission.payload,
        &submission.files,
    )
    .await?;

    Ok(Json(receipt.into()))
}

/// Round 2: repository and hosted links plus screenshots
pub async fn submit_round_2(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<RoundSubmissionResponse>> {
    submit_multipart(state, Round::Two, multipart).await
}

/// Round 3: design links and description plus screenshots
pub async fn submit_round_3(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<RoundSubmissionResponse>> {
    submit_multipart(state, Round::Three, multipart).await
}

/// Round 5: abstract plus presentation files
pub async fn submit_round_5(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<RoundSubmissionResponse>> {
    submit_multipart(state, Round::Five, multipart).await
}

/// Round 4: structured answers, no files
pub async fn submit_round_4(
    State(state): State<AppState>,
    Json(payload): Json<Round4Request>,
) -> AppResult<Json<RoundSubmissionResponse>> {
    payload.validate()?;

    let (team_name, payload) = payload.into_payload();
    let receipt =
        RoundService::submit(state.db(), state.uploader(), &team_name, payload, &[]).await?;

    Ok(Json(receipt.into()))
}
