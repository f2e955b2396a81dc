//! Team response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Team, TeamMember};

/// Team response
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    #[serde(rename = "Team_Name")]
    pub team_name: String,
    pub team_members: Vec<TeamMember>,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            team_name: team.team_name,
            team_members: team.team_members.0,
            created_at: team.created_at,
        }
    }
}

/// Registration response
#[derive(Debug, Serialize)]
pub struct RegisterTeamResponse {
    pub message: String,
    pub team: TeamResponse,
}
