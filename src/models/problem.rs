//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

/// Problem attached to a contest. Test cases and starter code are stored as
/// opaque JSON documents for the client editor.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub problem_id: i32,
    pub contest_id: String,
    pub title: String,
    pub description: String,
    pub test_cases: Json<Vec<serde_json::Value>>,
    pub score: i32,
    pub pre_code: Json<Vec<serde_json::Value>>,
    pub post_code: Json<Vec<serde_json::Value>>,
    pub created_at: DateTime<Utc>,
}
