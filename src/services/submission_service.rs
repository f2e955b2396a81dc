//! Submission service
//!
//! Code submissions are stored as a plain record; nothing here runs or
//! grades the code.

use sqlx::PgPool;

use crate::{
    db::repositories::{ProblemRepository, SubmissionRepository, TeamRepository},
    error::{AppError, AppResult},
    handlers::submissions::request::CreateSubmissionRequest,
    models::{Problem, Submission},
    utils::validate_team_name,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Record a submission from a registered team
    pub async fn create_submission(
        pool: &PgPool,
        payload: CreateSubmissionRequest,
    ) -> AppResult<Submission> {
        let team_name = validate_team_name(&payload.team_name)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !TeamRepository::exists(pool, &team_name).await? {
            return Err(AppError::NotFound(format!("Team '{}' is not registered", team_name)));
        }

        let problem = ProblemRepository::find_by_id(pool, payload.problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;
        Self::check_contest(&problem, &payload.contest_id)?;

        let submission = SubmissionRepository::create(
            pool,
            &team_name,
            &problem.contest_id,
            payload.problem_id,
            &payload.code,
            payload.status.trim(),
            payload.score,
        )
        .await?;

        tracing::info!(
            team = %team_name,
            problem_id = submission.problem_id,
            submission_id = submission.submission_id,
            "Submission recorded"
        );

        Ok(submission)
    }

    /// The submission must name the contest the problem belongs to
    fn check_contest(problem: &Problem, contest_id: &str) -> AppResult<()> {
        if problem.contest_id != contest_id.trim() {
            return Err(AppError::Validation(format!(
                "Problem {} does not belong to contest '{}'",
                problem.problem_id,
                contest_id.trim()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    fn problem(contest_id: &str) -> Problem {
        Problem {
            problem_id: 7,
            contest_id: contest_id.to_string(),
            title: "Two Sum".to_string(),
            description: "Find two numbers".to_string(),
            test_cases: Json(Vec::new()),
            score: 100,
            pre_code: Json(Vec::new()),
            post_code: Json(Vec::new()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_contest_must_match_problem() {
        let problem = problem("spring-2025");

        assert!(SubmissionService::check_contest(&problem, "spring-2025").is_ok());
        assert!(SubmissionService::check_contest(&problem, " spring-2025 ").is_ok());

        let err = SubmissionService::check_contest(&problem, "autumn-2025").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("autumn-2025")));
    }
}
