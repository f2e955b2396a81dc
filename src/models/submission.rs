//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Code submission record. Stored as received; nothing executes or grades it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub submission_id: i32,
    #[serde(rename = "Team_Name")]
    pub team_name: String,
    pub contest_id: String,
    pub problem_id: i32,
    #[serde(skip_serializing)]
    pub code: String,
    pub status: String,
    pub score: i32,
    pub submitted_at: DateTime<Utc>,
}
