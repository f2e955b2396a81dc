//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod contest;
pub mod leaderboard;
pub mod problem;
pub mod round;
pub mod submission;
pub mod team;

pub use contest::*;
pub use leaderboard::*;
pub use problem::*;
pub use round::*;
pub use submission::*;
pub use team::*;
