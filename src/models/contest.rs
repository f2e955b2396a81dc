//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contest metadata created by organizers
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub contest_id: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Contest {
    /// Get current status of the contest
    pub fn status_at(&self, now: DateTime<Utc>) -> ContestStatus {
        if now < self.start_time {
            ContestStatus::Upcoming
        } else if now < self.end_time {
            ContestStatus::Ongoing
        } else {
            ContestStatus::Ended
        }
    }
}

/// Contest status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Upcoming,
    Ongoing,
    Ended,
}
