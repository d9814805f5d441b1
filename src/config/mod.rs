//! Configuration module for domain-prospector
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting has a built-in default, so a config file is optional.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, GeneratorConfig, IdentityConfig, OutputConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
