//! Configuration for the embedder nodes and the standalone host

use secrecy::Secret;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

pub mod loader;
pub mod validation;

/// Fixed prediction endpoint of the embeddings API
pub const DEFAULT_API_URL: &str =
    "https://embeddings-api-452977999990.us-west1.run.app/models/fashionclip/predict";

/// Credential type the embedder reads its API key from
pub const DEFAULT_CREDENTIAL_NAME: &str = "customEmbedderApi";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub embedder: EmbedderConfig,

    #[serde(default)]
    pub host: HostConfig,

    #[serde(default)]
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration for the embedding transport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedderConfig {
    /// Prediction endpoint URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Credential type holding the API key
    #[serde(default = "default_credential_name")]
    pub credential_name: String,
}

/// Settings for the standalone host context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// HTTP helper timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Capture failures into output items instead of aborting
    #[serde(default)]
    pub continue_on_fail: bool,
}

/// Credential values loaded into the standalone host's store
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsConfig {
    /// API key for the embeddings API (secured, never serialized)
    #[serde(default, deserialize_with = "deserialize_optional_secret")]
    pub api_key: Option<Secret<String>>,
}

impl Serialize for CredentialsConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CredentialsConfig", 1)?;
        state.serialize_field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))?;
        state.end()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_api_url() -> String { DEFAULT_API_URL.to_string() }
fn default_credential_name() -> String { DEFAULT_CREDENTIAL_NAME.to_string() }
fn default_timeout() -> u64 { 30 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            credential_name: default_credential_name(),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            continue_on_fail: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        loader::load_config(path)
    }

    /// Load configuration with environment variable overrides
    pub fn from_file_with_env<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        loader::load_config_with_env(path)
    }

    /// Validate this configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        validation::validate_config(self)
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Self {
            embedder: EmbedderConfig::default(),
            host: HostConfig::default(),
            credentials: CredentialsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Custom deserializer for Option<Secret<String>>
fn deserialize_optional_secret<'de, D>(deserializer: D) -> Result<Option<Secret<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.map(Secret::new))
}
