//! HTTP middleware

pub mod admin;
pub mod logging;

pub use admin::admin_middleware;
pub use logging::logging_middleware;
