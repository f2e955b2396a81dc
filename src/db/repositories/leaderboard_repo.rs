//! Leaderboard repository

use sqlx::{PgConnection, PgPool};

use crate::{
    error::AppResult,
    models::{LeaderboardEntry, RankedTeam, RoundScores},
};

/// Repository for the cached leaderboard totals
pub struct LeaderboardRepository;

impl LeaderboardRepository {
    /// Serialize recomputes for one team until the surrounding transaction ends
    pub async fn lock_team(conn: &mut PgConnection, team_name: &str) -> AppResult<()> {
        sqlx::query(r#"SELECT pg_advisory_xact_lock(hashtext($1))"#)
            .bind(team_name)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    /// Recompute the team's total from the round tables and upsert it in a
    /// single statement. Missing rows and NULL scores count as zero.
    pub async fn upsert_total(
        conn: &mut PgConnection,
        team_name: &str,
    ) -> AppResult<LeaderboardEntry> {
        let entry = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            INSERT INTO leaderboard (team_name, team_score, updated_at)
            SELECT
                $1::text,
                COALESCE((SELECT score FROM round_2 WHERE team_name = $1), 0)
                    + COALESCE((SELECT score FROM round_3 WHERE team_name = $1), 0)
                    + COALESCE((SELECT score FROM round_4 WHERE team_name = $1), 0)
                    + COALESCE((SELECT score FROM round_5 WHERE team_name = $1), 0),
                NOW()
            ON CONFLICT (team_name) DO UPDATE SET
                team_score = EXCLUDED.team_score,
                updated_at = EXCLUDED.updated_at
            RETURNING team_name, team_score, updated_at
            "#,
        )
        .bind(team_name)
        .fetch_one(&mut *conn)
        .await?;

        Ok(entry)
    }

    /// Per-round scores for a team
    pub async fn round_scores(pool: &PgPool, team_name: &str) -> AppResult<RoundScores> {
        let scores = sqlx::query_as::<_, RoundScores>(
            r#"
            SELECT
                (SELECT score FROM round_2 WHERE team_name = $1) AS score_2,
                (SELECT score FROM round_3 WHERE team_name = $1) AS score_3,
                (SELECT score FROM round_4 WHERE team_name = $1) AS score_4,
                (SELECT score FROM round_5 WHERE team_name = $1) AS score_5
            "#,
        )
        .bind(team_name)
        .fetch_one(pool)
        .await?;

        Ok(scores)
    }

    /// Find the cached entry for a team
    pub async fn find(pool: &PgPool, team_name: &str) -> AppResult<Option<LeaderboardEntry>> {
        let entry = sqlx::query_as::<_, LeaderboardEntry>(
            r#"SELECT team_name, team_score, updated_at FROM leaderboard WHERE team_name = $1"#,
        )
        .bind(team_name)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }

    /// Every registered team with its cached total (0 when it has none),
    /// highest first, ties ordered by team name.
    pub async fn list_ranked(pool: &PgPool) -> AppResult<Vec<RankedTeam>> {
        let rows = sqlx::query_as::<_, RankedTeam>(
            r#"
            SELECT t.team_name, COALESCE(l.team_score, 0) AS team_score
            FROM teams t
            LEFT JOIN leaderboard l ON l.team_name = t.team_name
            ORDER BY team_score DESC, t.team_name ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
