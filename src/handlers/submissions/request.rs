//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_CODE_LENGTH, MAX_ROUND_SCORE, MIN_ROUND_SCORE};

/// Code submission request. The code is recorded, never executed.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    #[serde(rename = "Team_Name")]
    pub team_name: String,

    #[validate(length(min = 1, max = 128))]
    pub contest_id: String,

    pub problem_id: i32,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Code must not be empty"))]
    pub code: String,

    #[validate(length(min = 1, max = 32))]
    pub status: String,

    #[serde(default)]
    #[validate(range(min = MIN_ROUND_SCORE, max = MAX_ROUND_SCORE))]
    pub score: i32,
}
