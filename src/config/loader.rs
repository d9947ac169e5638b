//! Configuration loader with environment variable support

use super::Config;
use crate::error::Result;
use config::{Environment, File};
use std::path::Path;

/// Prefix for environment overrides, e.g. `CUSTOM_EMBEDDER__HOST__TIMEOUT_SECS`
const ENV_PREFIX: &str = "CUSTOM_EMBEDDER";

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load configuration from a TOML file with environment variable overrides
pub fn load_config_with_env<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let path = write_config(
            "embedder-partial",
            r#"
[host]
timeout_secs = 10

[credentials]
api_key = "abc"
"#,
        );

        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.host.timeout_secs, 10);
        assert_eq!(config.embedder.credential_name, "customEmbedderApi");
        assert_eq!(config.credentials.api_key.unwrap().expose_secret(), "abc");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = write_config(
            "embedder-invalid",
            r#"
[embedder]
api_url = "ftp://example.com/predict"
"#,
        );

        let result = load_config(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }
}
