//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.
//! Credentials are only ever read from the environment.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_UPLOAD_FOLDER, DEFAULT_UPLOAD_TIMEOUT_SECS,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub uploads: UploadConfig,
    pub admin: AdminConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
    pub request_timeout_secs: u64,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Asset host configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub folder: String,
    pub timeout_secs: u64,
    /// Maximum accepted multipart body size in bytes
    pub max_body_bytes: usize,
}

/// Administrative access configuration
#[derive(Debug, Clone, Default)]
pub struct AdminConfig {
    /// Bearer token for `/admin` routes; admin routes are disabled when unset
    pub token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            uploads: UploadConfig::from_env()?,
            admin: AdminConfig::from_env(),
        })
    }

    /// Defaults for everything except the database. Used where the
    /// environment is not consulted, such as tests.
    pub fn with_database_url(url: impl Into<String>) -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: url.into(),
                max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            },
            uploads: UploadConfig::default(),
            admin: AdminConfig::default(),
        }
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: LogFormat::parse(&env::var("LOG_FORMAT").unwrap_or_default())?,
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
            log_format: LogFormat::Pretty,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        // DATABASE_URL_LOCAL wins so a local database can shadow a hosted one
        let url = env::var("DATABASE_URL_LOCAL")
            .or_else(|_| env::var("DATABASE_URL"))
            .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?;

        Ok(Self {
            url,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
        })
    }
}

impl UploadConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_name: non_empty_var("CLOUDINARY_CLOUD_NAME"),
            api_key: non_empty_var("CLOUDINARY_API_KEY"),
            api_secret: non_empty_var("CLOUDINARY_API_SECRET"),
            folder: env::var("UPLOAD_FOLDER").unwrap_or_else(|_| DEFAULT_UPLOAD_FOLDER.to_string()),
            timeout_secs: parse_var("UPLOAD_TIMEOUT_SECS", DEFAULT_UPLOAD_TIMEOUT_SECS)?,
            max_body_bytes: parse_var("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }

    /// Whether all credentials for the asset host are present
    pub fn has_credentials(&self) -> bool {
        self.cloud_name.is_some() && self.api_key.is_some() && self.api_secret.is_some()
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            api_key: None,
            api_secret: None,
            folder: DEFAULT_UPLOAD_FOLDER.to_string(),
            timeout_secs: DEFAULT_UPLOAD_TIMEOUT_SECS,
            max_body_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AdminConfig {
    fn from_env() -> Self {
        Self {
            token: non_empty_var("ADMIN_TOKEN"),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
