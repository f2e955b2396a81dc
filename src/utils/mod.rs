//! Utility functions

pub mod crypto;
pub mod validation;

pub use crypto::secrets_match;
pub use validation::{
    is_image_content_type, require_field, sanitize_string, validate_round_score,
    validate_team_name,
};
