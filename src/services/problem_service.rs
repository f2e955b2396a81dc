//! Problem service

use sqlx::PgPool;

use crate::{
    db::repositories::{ContestRepository, ProblemRepository},
    error::{AppError, AppResult},
    handlers::problems::{request::CreateProblemRequest, response::ProblemResponse},
    models::Problem,
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// Create a problem; the contest must already exist
    pub async fn create_problem(pool: &PgPool, payload: CreateProblemRequest) -> AppResult<Problem> {
        if !ContestRepository::exists(pool, &payload.contest_id).await? {
            return Err(AppError::NotFound(format!(
                "Contest '{}' not found",
                payload.contest_id
            )));
        }

        let problem = ProblemRepository::create(
            pool,
            &payload.contest_id,
            payload.title.trim(),
            &payload.description,
            &payload.test_cases,
            payload.score,
            &payload.pre_code,
            &payload.post_code,
        )
        .await?;

        tracing::info!(
            problem_id = problem.problem_id,
            contest = %problem.contest_id,
            "Problem created"
        );

        Ok(problem)
    }

    /// Get problem by ID
    pub async fn get_problem(pool: &PgPool, problem_id: i32) -> AppResult<ProblemResponse> {
        let problem = ProblemRepository::find_by_id(pool, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        Ok(problem.into())
    }
}
