//! Round submission service
//!
//! Every round goes through the same path: validate, upload, then upsert the
//! round row and recompute the leaderboard in one transaction.

use serde::Serialize;
use sqlx::PgPool;

use crate::{
    db::repositories::{RoundRepository, TeamRepository},
    error::{AppError, AppResult},
    models::{Round, RoundPayload, RoundRecord, join_asset_urls},
    services::{LeaderboardService, UploadService},
    storage::{AssetUploader, UploadedFile},
    utils::{validate_round_score, validate_team_name},
};

/// Result of a round write
#[derive(Debug, Serialize)]
pub struct RoundReceipt {
    pub round: Round,
    pub submission: RoundRecord,
    pub urls: Vec<String>,
    pub team_score: i32,
}

/// Round service for business logic
pub struct RoundService;

impl RoundService {
    /// Submit (or resubmit) a round for a team.
    ///
    /// The team must be registered before anything is uploaded. A resubmission
    /// replaces the previous row and its score.
    pub async fn submit(
        pool: &PgPool,
        uploader: &dyn AssetUploader,
        team_name: &str,
        payload: RoundPayload,
        files: &[UploadedFile],
    ) -> AppResult<RoundReceipt> {
        let round = payload.round();
        let team_name = Self::check_submission(round, team_name, files)?;

        if !TeamRepository::exists(pool, &team_name).await? {
            return Err(AppError::NotFound(format!("Team '{}' is not registered", team_name)));
        }

        let urls = UploadService::upload_all(uploader, files).await?;
        let asset_links = join_asset_urls(&urls);

        let mut tx = pool.begin().await?;
        let submission =
            RoundRepository::upsert(&mut tx, &team_name, &payload, asset_links.as_deref()).await?;
        let entry = LeaderboardService::recompute_in(&mut tx, &team_name).await?;
        tx.commit().await?;

        tracing::info!(
            team = %team_name,
            round = round.number(),
            files = urls.len(),
            total = entry.team_score,
            "Round submitted"
        );

        Ok(RoundReceipt {
            round,
            submission,
            urls,
            team_score: entry.team_score,
        })
    }

    /// Set the score of an existing round submission and refresh the total
    pub async fn grade(
        pool: &PgPool,
        round: Round,
        team_name: &str,
        score: i32,
        feedback: Option<&str>,
    ) -> AppResult<RoundReceipt> {
        validate_round_score(score).map_err(|e| AppError::Validation(e.to_string()))?;
        let team_name =
            validate_team_name(team_name).map_err(|e| AppError::Validation(e.to_string()))?;

        let mut tx = pool.begin().await?;
        let submission = RoundRepository::set_score(&mut tx, round, &team_name, score, feedback)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No {} submission for team '{}'", round, team_name))
            })?;
        let entry = LeaderboardService::recompute_in(&mut tx, &team_name).await?;
        tx.commit().await?;

        tracing::info!(
            team = %team_name,
            round = round.number(),
            score,
            total = entry.team_score,
            "Round graded"
        );

        Ok(RoundReceipt {
            round,
            submission,
            urls: Vec::new(),
            team_score: entry.team_score,
        })
    }

    /// Checks that need no I/O; returns the sanitized team name
    fn check_submission(
        round: Round,
        team_name: &str,
        files: &[UploadedFile],
    ) -> AppResult<String> {
        let team_name =
            validate_team_name(team_name).map_err(|e| AppError::Validation(e.to_string()))?;

        if !files.is_empty() && !round.accepts_files() {
            return Err(AppError::InvalidInput(format!("{} does not accept files", round)));
        }

        Ok(team_name)
    }
}
