//! Contest response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Contest, ContestStatus};

/// Contest response
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    pub contest_id: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ContestStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Contest> for ContestResponse {
    fn from(contest: Contest) -> Self {
        let status = contest.status_at(Utc::now());
        Self {
            contest_id: contest.contest_id,
            description: contest.description,
            start_time: contest.start_time,
            end_time: contest.end_time,
            status,
            created_at: contest.created_at,
        }
    }
}
