//! Contest repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{error::AppResult, models::Contest};

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Create a new contest
    pub async fn create(
        pool: &PgPool,
        contest_id: &str,
        description: Option<&str>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> AppResult<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            INSERT INTO contests (contest_id, description, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(description)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(pool)
        .await?;

        Ok(contest)
    }

    /// Check if contest exists
    pub async fn exists(pool: &PgPool, contest_id: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM contests WHERE contest_id = $1)"#)
                .bind(contest_id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }
}
