//! Admin response DTOs

use serde::Serialize;

use crate::services::RoundReceipt;

/// Response after grading a round
#[derive(Debug, Serialize)]
pub struct GradeRoundResponse {
    pub message: String,
    #[serde(flatten)]
    pub receipt: RoundReceipt,
}

/// Response after a full leaderboard recompute
#[derive(Debug, Serialize)]
pub struct RecomputeResponse {
    pub message: String,
    pub teams_updated: usize,
}
