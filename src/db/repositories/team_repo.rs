//! Team repository

use sqlx::{PgPool, postgres::PgExecutor, types::Json};

use crate::{
    error::AppResult,
    models::{Team, TeamMember},
};

/// Repository for team database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Create a new team. A duplicate name surfaces as a unique violation.
    pub async fn create(
        pool: &PgPool,
        team_name: &str,
        members: &[TeamMember],
    ) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (team_name, team_members)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(team_name)
        .bind(Json(members))
        .fetch_one(pool)
        .await?;

        Ok(team)
    }

    /// Find team by name
    pub async fn find_by_name(pool: &PgPool, team_name: &str) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE team_name = $1"#)
            .bind(team_name)
            .fetch_optional(pool)
            .await?;

        Ok(team)
    }

    /// Check whether a team is registered
    pub async fn exists<'e, E>(executor: E, team_name: &str) -> AppResult<bool>
    where
        E: PgExecutor<'e>,
    {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM teams WHERE team_name = $1)"#)
                .bind(team_name)
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }

    /// All registered team names
    pub async fn list_names(pool: &PgPool) -> AppResult<Vec<String>> {
        let names: Vec<String> =
            sqlx::query_scalar(r#"SELECT team_name FROM teams ORDER BY team_name"#)
                .fetch_all(pool)
                .await?;

        Ok(names)
    }
}
