use crate::config::types::{Config, CrawlerConfig, GeneratorConfig, IdentityConfig, OutputConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_generator_config(&config.generator)?;
    validate_identity_config(&config.identity)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth = 0 is valid: crawl root pages only, follow nothing

    if config.max_retries < 1 {
        return Err(ConfigError::Validation(format!(
            "max_retries must be >= 1, got {}",
            config.max_retries
        )));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.max_domains < 1 {
        return Err(ConfigError::Validation(format!(
            "max_domains must be >= 1, got {}",
            config.max_domains
        )));
    }

    Ok(())
}

/// Validates generator configuration
fn validate_generator_config(config: &GeneratorConfig) -> Result<(), ConfigError> {
    if config.start_length < 1 {
        return Err(ConfigError::Validation(format!(
            "start_length must be >= 1, got {}",
            config.start_length
        )));
    }

    if let Some(max_length) = config.max_length {
        if max_length < config.start_length {
            return Err(ConfigError::Validation(format!(
                "max_length ({}) must be >= start_length ({})",
                max_length, config.start_length
            )));
        }
    }

    if config.extensions.is_empty() {
        return Err(ConfigError::Validation(
            "extensions cannot be empty".to_string(),
        ));
    }

    for extension in &config.extensions {
        if !extension.starts_with('.') || extension.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "extension '{}' must start with '.' followed by at least one character",
                extension
            )));
        }

        if !extension[1..].chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation(format!(
                "extension '{}' must contain only alphanumeric characters after the dot",
                extension
            )));
        }
    }

    Ok(())
}

/// Validates identity configuration
fn validate_identity_config(config: &IdentityConfig) -> Result<(), ConfigError> {
    if config.user_agents.is_empty() {
        return Err(ConfigError::Validation(
            "user_agents cannot be empty".to_string(),
        ));
    }

    for agent in &config.user_agents {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user_agents entries cannot be blank".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    if config.json_path.is_empty() {
        return Err(ConfigError::Validation(
            "json_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
