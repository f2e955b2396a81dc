//! Contest request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_TEXT_FIELD_LENGTH;

/// Create contest request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContestRequest {
    #[validate(length(min = 1, max = 128, message = "Contest id must be 1-128 characters"))]
    pub contest_id: String,

    #[validate(length(max = MAX_TEXT_FIELD_LENGTH))]
    pub description: Option<String>,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
