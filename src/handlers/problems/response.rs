//! Problem response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::models::Problem;

/// Problem response
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub problem_id: i32,
    pub contest_id: String,
    pub title: String,
    pub description: String,
    pub test_cases: Vec<Value>,
    pub score: i32,
    pub pre_code: Vec<Value>,
    pub post_code: Vec<Value>,
    pub created_at: DateTime<Utc>,
}

impl From<Problem> for ProblemResponse {
    fn from(problem: Problem) -> Self {
        Self {
            problem_id: problem.problem_id,
            contest_id: problem.contest_id,
            title: problem.title,
            description: problem.description,
            test_cases: problem.test_cases.0,
            score: problem.score,
            pre_code: problem.pre_code.0,
            post_code: problem.post_code.0,
            created_at: problem.created_at,
        }
    }
}

/// Response after creating a problem
#[derive(Debug, Serialize)]
pub struct CreateProblemResponse {
    pub message: String,
    pub problem_id: i32,
}
