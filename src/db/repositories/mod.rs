//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod contest_repo;
pub mod leaderboard_repo;
pub mod problem_repo;
pub mod round_repo;
pub mod submission_repo;
pub mod team_repo;

pub use contest_repo::ContestRepository;
pub use leaderboard_repo::LeaderboardRepository;
pub use problem_repo::ProblemRepository;
pub use round_repo::RoundRepository;
pub use submission_repo::SubmissionRepository;
pub use team_repo::TeamRepository;
