//! Round submission repository
//!
//! Every write is an upsert keyed by team name: a resubmission replaces the
//! previous row for that round, score included.

use sqlx::PgConnection;

use crate::{
    constants::STATUS_SUBMITTED,
    error::AppResult,
    models::{
        Round, Round2Submission, Round3Submission, Round4Submission, Round5Submission,
        RoundPayload, RoundRecord,
    },
};

/// Repository for the per-round tables
pub struct RoundRepository;

impl RoundRepository {
    /// Insert or replace the team's row for the payload's round
    pub async fn upsert(
        conn: &mut PgConnection,
        team_name: &str,
        payload: &RoundPayload,
        asset_links: Option<&str>,
    ) -> AppResult<RoundRecord> {
        let score = payload.initial_score();

        let record = match payload {
            RoundPayload::Two {
                git_hub_link,
                hosted_link,
            } => RoundRecord::Two(
                sqlx::query_as::<_, Round2Submission>(
                    r#"
                    INSERT INTO round_2 (team_name, git_hub_link, hosted_link, ss_links, status, score)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    ON CONFLICT (team_name) DO UPDATE SET
                        git_hub_link = EXCLUDED.git_hub_link,
                        hosted_link = EXCLUDED.hosted_link,
                        ss_links = EXCLUDED.ss_links,
                        status = EXCLUDED.status,
                        score = EXCLUDED.score,
                        submitted_at = NOW()
                    RETURNING *
                    "#,
                )
                .bind(team_name)
                .bind(git_hub_link)
                .bind(hosted_link)
                .bind(asset_links)
                .bind(STATUS_SUBMITTED)
                .bind(score)
                .fetch_one(&mut *conn)
                .await?,
            ),
            RoundPayload::Three {
                figma_links,
                description,
            } => RoundRecord::Three(
                sqlx::query_as::<_, Round3Submission>(
                    r#"
                    INSERT INTO round_3 (team_name, figma_links, description, ss_links, status, score)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    ON CONFLICT (team_name) DO UPDATE SET
                        figma_links = EXCLUDED.figma_links,
                        description = EXCLUDED.description,
                        ss_links = EXCLUDED.ss_links,
                        status = EXCLUDED.status,
                        feedback = NULL,
                        score = EXCLUDED.score,
                        submitted_at = NOW()
                    RETURNING *
                    "#,
                )
                .bind(team_name)
                .bind(figma_links)
                .bind(description)
                .bind(asset_links)
                .bind(STATUS_SUBMITTED)
                .bind(score)
                .fetch_one(&mut *conn)
                .await?,
            ),
            RoundPayload::Four {
                structured_submission,
                question,
                ..
            } => RoundRecord::Four(
                sqlx::query_as::<_, Round4Submission>(
                    r#"
                    INSERT INTO round_4 (team_name, structured_submission, question, status, score)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (team_name) DO UPDATE SET
                        structured_submission = EXCLUDED.structured_submission,
                        question = EXCLUDED.question,
                        status = EXCLUDED.status,
                        score = EXCLUDED.score,
                        submitted_at = NOW()
                    RETURNING *
                    "#,
                )
                .bind(team_name)
                .bind(structured_submission)
                .bind(question.as_deref())
                .bind(STATUS_SUBMITTED)
                .bind(score)
                .fetch_one(&mut *conn)
                .await?,
            ),
            RoundPayload::Five { abstract_text, .. } => RoundRecord::Five(
                sqlx::query_as::<_, Round5Submission>(
                    r#"
                    INSERT INTO round_5 (team_name, abstract, ppt_links, status, score)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (team_name) DO UPDATE SET
                        abstract = EXCLUDED.abstract,
                        ppt_links = EXCLUDED.ppt_links,
                        status = EXCLUDED.status,
                        score = EXCLUDED.score,
                        submitted_at = NOW()
                    RETURNING *
                    "#,
                )
                .bind(team_name)
                .bind(abstract_text)
                .bind(asset_links)
                .bind(STATUS_SUBMITTED)
                .bind(score)
                .fetch_one(&mut *conn)
                .await?,
            ),
        };

        Ok(record)
    }

    /// Overwrite the score of an existing round row. Returns `None` when the
    /// team has not submitted that round. Feedback is only kept for round 3.
    pub async fn set_score(
        conn: &mut PgConnection,
        round: Round,
        team_name: &str,
        score: i32,
        feedback: Option<&str>,
    ) -> AppResult<Option<RoundRecord>> {
        let record = match round {
            Round::Two => sqlx::query_as::<_, Round2Submission>(
                r#"UPDATE round_2 SET score = $2 WHERE team_name = $1 RETURNING *"#,
            )
            .bind(team_name)
            .bind(score)
            .fetch_optional(&mut *conn)
            .await?
            .map(RoundRecord::Two),
            Round::Three => sqlx::query_as::<_, Round3Submission>(
                r#"
                UPDATE round_3
                SET score = $2, feedback = COALESCE($3, feedback)
                WHERE team_name = $1
                RETURNING *
                "#,
            )
            .bind(team_name)
            .bind(score)
            .bind(feedback)
            .fetch_optional(&mut *conn)
            .await?
            .map(RoundRecord::Three),
            Round::Four => sqlx::query_as::<_, Round4Submission>(
                r#"UPDATE round_4 SET score = $2 WHERE team_name = $1 RETURNING *"#,
            )
            .bind(team_name)
            .bind(score)
            .fetch_optional(&mut *conn)
            .await?
            .map(RoundRecord::Four),
            Round::Five => sqlx::query_as::<_, Round5Submission>(
                r#"UPDATE round_5 SET score = $2 WHERE team_name = $1 RETURNING *"#,
            )
            .bind(team_name)
            .bind(score)
            .fetch_optional(&mut *conn)
            .await?
            .map(RoundRecord::Five),
        };

        Ok(record)
    }
}
