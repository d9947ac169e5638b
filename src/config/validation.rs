//! Configuration validation

use super::*;
use crate::error::{NodeError, Result};

const LOG_FORMATS: &[&str] = &["json", "compact", "pretty"];

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_embedder_config(&config.embedder)?;
    validate_host_config(&config.host)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate embedder configuration
fn validate_embedder_config(config: &EmbedderConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(NodeError::Config(
            "Embedder API URL cannot be empty".to_string()
        ));
    }

    if !config.api_url.starts_with("http://") && !config.api_url.starts_with("https://") {
        return Err(NodeError::Config(
            "Embedder API URL must start with http:// or https://".to_string()
        ));
    }

    if config.credential_name.trim().is_empty() {
        return Err(NodeError::Config(
            "Embedder credential name cannot be empty".to_string()
        ));
    }

    Ok(())
}

/// Validate host configuration
fn validate_host_config(config: &HostConfig) -> Result<()> {
    if config.timeout_secs == 0 {
        return Err(NodeError::Config(
            "Host timeout must be greater than 0".to_string()
        ));
    }

    if config.timeout_secs > 300 {
        return Err(NodeError::Config(
            "Host timeout too large (max: 300 seconds)".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if !LOG_FORMATS.contains(&config.format.as_str()) {
        return Err(NodeError::Config(format!(
            "Unknown log format '{}' (expected one of: {})",
            config.format,
            LOG_FORMATS.join(", ")
        )));
    }

    Ok(())
}
