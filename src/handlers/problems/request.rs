//! Problem request DTOs

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::constants::{MAX_ROUND_SCORE, MAX_TEXT_FIELD_LENGTH, MIN_ROUND_SCORE};

/// Create problem request. Test cases and code templates are passed through
/// to the client editor unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = 128))]
    pub contest_id: String,

    #[validate(length(min = 1, max = 256, message = "Title must be 1-256 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_TEXT_FIELD_LENGTH))]
    pub description: String,

    #[serde(default)]
    pub test_cases: Vec<Value>,

    #[serde(default)]
    #[validate(range(min = MIN_ROUND_SCORE, max = MAX_ROUND_SCORE))]
    pub score: i32,

    #[serde(default)]
    pub pre_code: Vec<Value>,

    #[serde(default)]
    pub post_code: Vec<Value>,
}
