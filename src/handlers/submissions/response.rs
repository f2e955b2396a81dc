//! Submission response DTOs

use serde::Serialize;

/// Response after recording a submission
#[derive(Debug, Serialize)]
pub struct CreateSubmissionResponse {
    pub message: String,
    pub submission_id: i32,
}
