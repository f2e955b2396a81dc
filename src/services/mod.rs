//! Business logic services

pub mod contest_service;
pub mod leaderboard_service;
pub mod problem_service;
pub mod round_service;
pub mod submission_service;
pub mod team_service;
pub mod upload_service;

pub use contest_service::ContestService;
pub use leaderboard_service::{LeaderboardService, TeamStanding};
pub use problem_service::ProblemService;
pub use round_service::{RoundReceipt, RoundService};
pub use submission_service::SubmissionService;
pub use team_service::TeamService;
pub use upload_service::UploadService;
