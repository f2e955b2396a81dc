//! Leaderboard model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cached total for one team. Derived from the round tables and rewritten on
/// every round write.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "Team_Name")]
    pub team_name: String,
    pub team_score: i32,
    pub updated_at: DateTime<Utc>,
}

/// Row of the public ranking
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct RankedTeam {
    #[sqlx(skip)]
    #[serde(default)]
    pub rank: u32,
    #[serde(rename = "Team_Name")]
    pub team_name: String,
    pub team_score: i32,
}

/// Assigns competition ranks ("1224") to rows already sorted by score
/// descending. Teams with equal totals share a rank.
pub fn assign_ranks(rows: &mut [RankedTeam]) {
    let mut previous: Option<i32> = None;
    let mut current_rank = 0;

    for (index, row) in rows.iter_mut().enumerate() {
        if previous != Some(row.team_score) {
            current_rank = index as u32 + 1;
            previous = Some(row.team_score);
        }
        row.rank = current_rank;
    }
}
