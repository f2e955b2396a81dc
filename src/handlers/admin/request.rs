//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_ROUND_SCORE, MAX_TEXT_FIELD_LENGTH, MIN_ROUND_SCORE};

/// Grade a round submission
#[derive(Debug, Deserialize, Validate)]
pub struct GradeRoundRequest {
    #[validate(range(min = MIN_ROUND_SCORE, max = MAX_ROUND_SCORE))]
    pub score: i32,

    /// Reviewer notes; kept for round 3 only
    #[validate(length(max = MAX_TEXT_FIELD_LENGTH))]
    pub feedback: Option<String>,
}
