//! Team request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_TEAM_MEMBERS, models::TeamMember};

/// Register team request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterTeamRequest {
    #[serde(rename = "Team_Name")]
    #[validate(length(min = 1, max = 128))]
    pub team_name: String,

    /// At least one member; each entry is validated
    #[validate(length(min = 1, max = MAX_TEAM_MEMBERS), nested)]
    pub team_members: Vec<TeamMember>,
}
