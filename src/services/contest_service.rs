//! Contest service

use sqlx::PgPool;

use crate::{
    db::repositories::ContestRepository,
    error::{AppError, AppResult},
    handlers::contests::{request::CreateContestRequest, response::ContestResponse},
    utils::sanitize_string,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Create a new contest
    pub async fn create_contest(
        pool: &PgPool,
        payload: CreateContestRequest,
    ) -> AppResult<ContestResponse> {
        if payload.end_time <= payload.start_time {
            return Err(AppError::Validation(
                "End time must be after start time".to_string(),
            ));
        }

        let contest_id = sanitize_string(&payload.contest_id);
        if contest_id.is_empty() {
            return Err(AppError::Validation("Contest id cannot be empty".to_string()));
        }

        let contest = ContestRepository::create(
            pool,
            &contest_id,
            payload.description.as_deref(),
            payload.start_time,
            payload.end_time,
        )
        .await
        .map_err(|e| match e {
            AppError::AlreadyExists(_) => {
                AppError::AlreadyExists(format!("Contest '{}' already exists", contest_id))
            }
            other => other,
        })?;

        tracing::info!(contest = %contest.contest_id, "Contest created");

        Ok(contest.into())
    }
}
