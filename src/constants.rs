//! Application-wide constants
//!
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// UPLOAD DEFAULTS
// =============================================================================

/// Default asset host folder for uploaded files
pub const DEFAULT_UPLOAD_FOLDER: &str = "contest_uploads";

/// Default timeout for a single upload to the asset host
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Default maximum multipart body size (25MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Separator used when flattening asset URLs into a single column
pub const ASSET_URL_SEPARATOR: &str = ",";

// =============================================================================
// ROUNDS
// =============================================================================

/// Status recorded for every round write
pub const STATUS_SUBMITTED: &str = "Submitted";

/// Multipart field carrying uploaded files
pub const FILES_FIELD: &str = "files";

/// Multipart/JSON field carrying the team name
pub const TEAM_NAME_FIELD: &str = "Team_Name";

// =============================================================================
// VALIDATION LIMITS
// =============================================================================

/// Maximum team name length
pub const MAX_TEAM_NAME_LENGTH: usize = 128;

/// Maximum members per team
pub const MAX_TEAM_MEMBERS: u64 = 10;

/// Maximum length of a free-text round field
pub const MAX_TEXT_FIELD_LENGTH: u64 = 20_000;

/// Maximum length of a link field
pub const MAX_LINK_LENGTH: u64 = 2048;

/// Maximum source code size for generic submissions (1MB)
pub const MAX_CODE_LENGTH: u64 = 1_048_576;

/// Lowest score an administrator may assign to a round
pub const MIN_ROUND_SCORE: i32 = 0;

/// Highest score an administrator may assign to a round
pub const MAX_ROUND_SCORE: i32 = 1000;
