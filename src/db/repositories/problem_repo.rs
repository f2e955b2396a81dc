//! Problem repository

use sqlx::{PgPool, types::Json};

use crate::{error::AppResult, models::Problem};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new problem
    pub async fn create(
        pool: &PgPool,
        contest_id: &str,
        title: &str,
        description: &str,
        test_cases: &[serde_json::Value],
        score: i32,
        pre_code: &[serde_json::Value],
        post_code: &[serde_json::Value],
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (contest_id, title, description, test_cases, score, pre_code, post_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(title)
        .bind(description)
        .bind(Json(test_cases))
        .bind(score)
        .bind(Json(pre_code))
        .bind(Json(post_code))
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, problem_id: i32) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE problem_id = $1"#)
            .bind(problem_id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }
}
