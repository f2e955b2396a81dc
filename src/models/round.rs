//! Round submission models
//!
//! Each contest round has its own table keyed by team name. A team holds at
//! most one row per round; resubmitting replaces that row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::ASSET_URL_SEPARATOR;

/// Scored contest rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Round {
    Two,
    Three,
    Four,
    Five,
}

impl Round {
    /// Round number as shown to contestants
    pub fn number(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Whether the round accepts file uploads
    pub fn accepts_files(self) -> bool {
        !matches!(self, Self::Four)
    }
}

impl TryFrom<u8> for Round {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(format!("Unknown round: {}", other)),
        }
    }
}

impl From<Round> for u8 {
    fn from(round: Round) -> Self {
        round.number()
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "round {}", self.number())
    }
}

/// Per-round scores for one team; `None` when the team has no row or the
/// score column is NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct RoundScores {
    pub score_2: Option<i32>,
    pub score_3: Option<i32>,
    pub score_4: Option<i32>,
    pub score_5: Option<i32>,
}

impl RoundScores {
    /// Sum of all round scores, missing scores counting as zero
    pub fn total(&self) -> i32 {
        [self.score_2, self.score_3, self.score_4, self.score_5]
            .into_iter()
            .map(|s| s.unwrap_or(0))
            .sum()
    }
}

/// Round-specific fields supplied by a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundPayload {
    Two {
        git_hub_link: String,
        hosted_link: String,
    },
    Three {
        figma_links: String,
        description: String,
    },
    Four {
        structured_submission: String,
        question: Option<String>,
        score: i32,
    },
    Five {
        abstract_text: String,
        score: i32,
    },
}

impl RoundPayload {
    pub fn round(&self) -> Round {
        match self {
            Self::Two { .. } => Round::Two,
            Self::Three { .. } => Round::Three,
            Self::Four { .. } => Round::Four,
            Self::Five { .. } => Round::Five,
        }
    }

    /// Score written with the submission. Rounds 2 and 3 are graded later and
    /// start from zero.
    pub fn initial_score(&self) -> i32 {
        match self {
            Self::Two { .. } | Self::Three { .. } => 0,
            Self::Four { score, .. } | Self::Five { score, .. } => *score,
        }
    }
}

/// Round 2: repository and hosted links
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Round2Submission {
    #[serde(rename = "Team_Name")]
    pub team_name: String,
    pub git_hub_link: String,
    pub hosted_link: Option<String>,
    pub ss_links: Option<String>,
    pub status: Option<String>,
    pub score: Option<i32>,
    pub submitted_at: DateTime<Utc>,
}

/// Round 3: design links
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Round3Submission {
    #[serde(rename = "Team_Name")]
    pub team_name: String,
    pub figma_links: String,
    pub description: Option<String>,
    pub ss_links: Option<String>,
    pub status: Option<String>,
    pub feedback: Option<String>,
    pub score: Option<i32>,
    pub submitted_at: DateTime<Utc>,
}

/// Round 4: structured answers
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Round4Submission {
    #[serde(rename = "Team_Name")]
    pub team_name: String,
    pub structured_submission: String,
    pub question: Option<String>,
    pub status: Option<String>,
    pub score: Option<i32>,
    pub submitted_at: DateTime<Utc>,
}

/// Round 5: abstract and slides
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Round5Submission {
    #[serde(rename = "Team_Name")]
    pub team_name: String,
    #[sqlx(rename = "abstract")]
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub ppt_links: Option<String>,
    pub status: Option<String>,
    pub score: Option<i32>,
    pub submitted_at: DateTime<Utc>,
}

/// A persisted row from any round table
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RoundRecord {
    Two(Round2Submission),
    Three(Round3Submission),
    Four(Round4Submission),
    Five(Round5Submission),
}

impl RoundRecord {
    pub fn score(&self) -> Option<i32> {
        match self {
            Self::Two(r) => r.score,
            Self::Three(r) => r.score,
            Self::Four(r) => r.score,
            Self::Five(r) => r.score,
        }
    }
}

/// Flattens asset URLs into the single text column the round tables use
pub fn join_asset_urls(urls: &[String]) -> Option<String> {
    if urls.is_empty() {
        None
    } else {
        Some(urls.join(ASSET_URL_SEPARATOR))
    }
}
