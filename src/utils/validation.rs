//! Input validation utilities

use crate::constants::{MAX_ROUND_SCORE, MAX_TEAM_NAME_LENGTH, MIN_ROUND_SCORE};

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize a team name
pub fn validate_team_name(name: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(name);
    if sanitized.is_empty() {
        return Err("Team name cannot be empty");
    }
    if sanitized.chars().count() > MAX_TEAM_NAME_LENGTH {
        return Err("Team name must be at most 128 characters");
    }
    if sanitized.contains(['\n', '\t']) {
        return Err("Team name must be a single line");
    }
    Ok(sanitized)
}

/// Whether a declared content type is an image (`image/*`)
pub fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.trim().to_ascii_lowercase())
        .is_some_and(|ct| ct.starts_with("image/") && ct.len() > "image/".len())
}

/// Validate a round score
pub fn validate_round_score(score: i32) -> Result<(), &'static str> {
    if !(MIN_ROUND_SCORE..=MAX_ROUND_SCORE).contains(&score) {
        return Err("Score must be between 0 and 1000");
    }
    Ok(())
}

/// Require a non-empty text field, returning it sanitized
pub fn require_field(value: Option<String>, field: &str) -> Result<String, String> {
    value
        .map(|v| sanitize_string(&v))
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("Missing required field: {}", field))
}
