//! Submission repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Submission};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission
    pub async fn create(
        pool: &PgPool,
        team_name: &str,
        contest_id: &str,
        problem_id: i32,
        code: &str,
        status: &str,
        score: i32,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (team_name, contest_id, problem_id, code, status, score)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(team_name)
        .bind(contest_id)
        .bind(problem_id)
        .bind(code)
        .bind(status)
        .bind(score)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }
}
