//! Team model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use validator::Validate;

/// Registered team
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "Team_Name")]
    pub team_name: String,
    pub team_members: Json<Vec<TeamMember>>,
    pub created_at: DateTime<Utc>,
}

/// Member entry stored in the team's member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TeamMember {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 64))]
    pub role: Option<String>,

    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
}
