//! Leaderboard service
//!
//! The leaderboard row for a team is a cache of the sum of its round scores.
//! All writes go through [`LeaderboardService::recompute_in`], which holds a
//! per-team advisory lock and recomputes with a single upsert statement, so
//! concurrent recomputes for one team cannot lose an update.

use serde::Serialize;
use sqlx::{PgConnection, PgPool};

use crate::{
    db::repositories::{LeaderboardRepository, TeamRepository},
    error::{AppError, AppResult},
    models::{LeaderboardEntry, RankedTeam, RoundScores, assign_ranks},
    utils::validate_team_name,
};

/// Score breakdown for a single team
#[derive(Debug, Serialize)]
pub struct TeamStanding {
    #[serde(rename = "Team_Name")]
    pub team_name: String,
    pub score_2: i32,
    pub score_3: i32,
    pub score_4: i32,
    pub score_5: i32,
    pub team_score: i32,
}

impl TeamStanding {
    fn from_scores(team_name: String, scores: RoundScores) -> Self {
        Self {
            team_name,
            score_2: scores.score_2.unwrap_or(0),
            score_3: scores.score_3.unwrap_or(0),
            score_4: scores.score_4.unwrap_or(0),
            score_5: scores.score_5.unwrap_or(0),
            team_score: scores.total(),
        }
    }
}

/// Leaderboard service for business logic
pub struct LeaderboardService;

impl LeaderboardService {
    /// Recompute a team's total inside the caller's transaction
    pub async fn recompute_in(
        conn: &mut PgConnection,
        team_name: &str,
    ) -> AppResult<LeaderboardEntry> {
        LeaderboardRepository::lock_team(conn, team_name).await?;
        let entry = LeaderboardRepository::upsert_total(conn, team_name).await?;

        tracing::debug!(team = %team_name, total = entry.team_score, "Leaderboard recomputed");

        Ok(entry)
    }

    /// Recompute a team's total in its own transaction
    pub async fn recompute(pool: &PgPool, team_name: &str) -> AppResult<LeaderboardEntry> {
        let mut tx = pool.begin().await?;
        let entry = Self::recompute_in(&mut tx, team_name).await?;
        tx.commit().await?;
        Ok(entry)
    }

    /// Recompute every registered team; returns the number of teams updated
    pub async fn recompute_all(pool: &PgPool) -> AppResult<usize> {
        let teams = TeamRepository::list_names(pool).await?;

        for team in &teams {
            Self::recompute(pool, team).await?;
        }

        tracing::info!(teams = teams.len(), "Recomputed all leaderboard entries");

        Ok(teams.len())
    }

    /// Ranked leaderboard: every registered team exactly once, highest total
    /// first, teams without submissions at zero.
    pub async fn list_ranked(pool: &PgPool) -> AppResult<Vec<RankedTeam>> {
        let mut rows = LeaderboardRepository::list_ranked(pool).await?;
        assign_ranks(&mut rows);
        Ok(rows)
    }

    /// Per-round breakdown for one registered team
    pub async fn standing(pool: &PgPool, team_name: &str) -> AppResult<TeamStanding> {
        let team_name =
            validate_team_name(team_name).map_err(|e| AppError::Validation(e.to_string()))?;

        if !TeamRepository::exists(pool, &team_name).await? {
            return Err(AppError::NotFound(format!("Team '{}' not found", team_name)));
        }

        let scores = LeaderboardRepository::round_scores(pool, &team_name).await?;
        Ok(TeamStanding::from_scores(team_name, scores))
    }
}
