//! Team service

use sqlx::PgPool;

use crate::{
    db::repositories::TeamRepository,
    error::{AppError, AppResult},
    handlers::teams::{request::RegisterTeamRequest, response::TeamResponse},
    models::TeamMember,
    utils::{sanitize_string, validate_team_name},
};

/// Team service for business logic
pub struct TeamService;

impl TeamService {
    /// Register a team. The name is the team's identity for every round and
    /// cannot be registered twice.
    pub async fn register(pool: &PgPool, payload: RegisterTeamRequest) -> AppResult<TeamResponse> {
        let team_name = validate_team_name(&payload.team_name)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let members = Self::normalize_members(payload.team_members)?;

        let team = TeamRepository::create(pool, &team_name, &members)
            .await
            .map_err(|e| match e {
                AppError::AlreadyExists(_) => {
                    AppError::AlreadyExists(format!("Team '{}' is already registered", team_name))
                }
                other => other,
            })?;

        tracing::info!(team = %team.team_name, members = members.len(), "Team registered");

        Ok(team.into())
    }

    /// Get a team by name
    pub async fn get(pool: &PgPool, team_name: &str) -> AppResult<TeamResponse> {
        let team_name =
            validate_team_name(team_name).map_err(|e| AppError::Validation(e.to_string()))?;

        let team = TeamRepository::find_by_name(pool, &team_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team '{}' not found", team_name)))?;

        Ok(team.into())
    }

    fn normalize_members(members: Vec<TeamMember>) -> AppResult<Vec<TeamMember>> {
        members
            .into_iter()
            .map(|m| {
                let name = sanitize_string(&m.name);
                if name.is_empty() {
                    return Err(AppError::Validation("Member name cannot be empty".to_string()));
                }
                Ok(TeamMember {
                    name,
                    role: m.role.map(|r| sanitize_string(&r)).filter(|r| !r.is_empty()),
                    email: m.email.map(|e| e.trim().to_lowercase()).filter(|e| !e.is_empty()),
                })
            })
            .collect()
    }
}
