//! Round request DTOs
//!
//! Rounds 2, 3 and 5 arrive as multipart forms (text fields plus a repeated
//! `files` part); round 4 is plain JSON.

use std::collections::HashMap;

use axum::extract::Multipart;
use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{
        FILES_FIELD, MAX_LINK_LENGTH, MAX_ROUND_SCORE, MAX_TEXT_FIELD_LENGTH, MIN_ROUND_SCORE,
        TEAM_NAME_FIELD,
    },
    error::{AppError, AppResult},
    models::{Round, RoundPayload},
    storage::UploadedFile,
    utils::require_field,
};

/// Multipart form buffered in memory, shared by the round and bulk upload routes
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    pub files: Vec<UploadedFile>,
}

impl MultipartForm {
    /// Read every part of the form. Parts named `files` are collected in
    /// order; any other part is treated as a text field.
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if name == FILES_FIELD {
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let data = field.bytes().await?;

                // Browsers send an empty, unnamed part when no file was picked
                if data.is_empty() && file_name.as_deref().is_none_or(str::is_empty) {
                    continue;
                }

                form.files.push(UploadedFile::new(file_name, content_type, data));
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Build a form directly from parts
    pub fn from_parts<I, K, V>(fields: I, files: Vec<UploadedFile>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            files,
        }
    }

    fn take(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }

    fn require(&mut self, key: &str) -> AppResult<String> {
        require_field(self.take(key), key).map_err(AppError::Validation)
    }

    fn score(&mut self, key: &str) -> AppResult<i32> {
        match self.take(key).map(|s| s.trim().to_string()) {
            None => Ok(0),
            Some(raw) if raw.is_empty() => Ok(0),
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Validation(format!("{} must be an integer", key))),
        }
    }

    /// Convert the form into a submission for the given multipart round
    pub fn into_submission(mut self, round: Round) -> AppResult<RoundSubmission> {
        // Emptiness is checked by the service so every round reports it the same way
        let team_name = self.take(TEAM_NAME_FIELD).unwrap_or_default();

        let payload = match round {
            Round::Two => {
                let fields = Round2Fields {
                    git_hub_link: self.require("git_hub_link")?,
                    hosted_link: self.require("hosted_link")?,
                };
                fields.validate()?;
                RoundPayload::Two {
                    git_hub_link: fields.git_hub_link,
                    hosted_link: fields.hosted_link,
                }
            }
            Round::Three => {
                let fields = Round3Fields {
                    figma_links: self.require("figma_links")?,
                    description: self.require("description")?,
                };
                fields.validate()?;
                RoundPayload::Three {
                    figma_links: fields.figma_links,
                    description: fields.description,
                }
            }
            Round::Five => {
                let fields = Round5Fields {
                    abstract_text: self.require("abstract")?,
                    score_5: self.score("score_5")?,
                };
                fields.validate()?;
                RoundPayload::Five {
                    abstract_text: fields.abstract_text,
                    score: fields.score_5,
                }
            }
            Round::Four => {
                return Err(AppError::InvalidInput(
                    "round 4 is submitted as JSON, not multipart".to_string(),
                ));
            }
        };

        Ok(RoundSubmission {
            team_name,
            payload,
            files: self.files,
        })
    }
}

/// Parsed round submission ready for the service
#[derive(Debug)]
pub struct RoundSubmission {
    pub team_name: String,
    pub payload: RoundPayload,
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Validate)]
struct Round2Fields {
    #[validate(length(max = MAX_LINK_LENGTH), url)]
    git_hub_link: String,

    #[validate(length(max = MAX_LINK_LENGTH))]
    hosted_link: String,
}

#[derive(Debug, Validate)]
struct Round3Fields {
    #[validate(length(max = MAX_TEXT_FIELD_LENGTH))]
    figma_links: String,

    #[validate(length(max = MAX_TEXT_FIELD_LENGTH))]
    description: String,
}

#[derive(Debug, Validate)]
struct Round5Fields {
    #[validate(length(max = MAX_TEXT_FIELD_LENGTH))]
    abstract_text: String,

    #[validate(range(min = MIN_ROUND_SCORE, max = MAX_ROUND_SCORE))]
    score_5: i32,
}

/// Round 4 submission (JSON)
#[derive(Debug, Deserialize, Validate)]
pub struct Round4Request {
    #[serde(rename = "Team_Name")]
    pub team_name: String,

    #[validate(length(min = 1, max = MAX_TEXT_FIELD_LENGTH))]
    pub structured_submission: String,

    #[validate(length(max = MAX_TEXT_FIELD_LENGTH))]
    pub question: Option<String>,

    #[serde(default)]
    #[validate(range(min = MIN_ROUND_SCORE, max = MAX_ROUND_SCORE))]
    pub score_4: i32,
}

impl Round4Request {
    pub fn into_payload(self) -> (String, RoundPayload) {
        (
            self.team_name,
            RoundPayload::Four {
                structured_submission: self.structured_submission,
                question: self.question.filter(|q| !q.trim().is_empty()),
                score: self.score_4,
            },
        )
    }
}
