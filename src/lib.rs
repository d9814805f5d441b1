//! Domain-Prospector: a brute-force domain surveyor
//!
//! This crate enumerates candidate domain names, fetches whatever answers,
//! maps each reachable site's internal links to a bounded depth, and keeps
//! CSV and JSON reports current after every find.

pub mod config;
pub mod crawler;
pub mod generator;
pub mod model;
pub mod output;
pub mod summary;
pub mod url;

use thiserror::Error;

/// Main error type for domain-prospector operations
#[derive(Debug, Error)]
pub enum ProspectorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("CSV report error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON report error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for domain-prospector operations
pub type Result<T> = std::result::Result<T, ProspectorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use model::{CrawlNode, CrawlResultSet, LinkRecord, LinkStatus};
