//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::validate_config;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServiceConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(|errors| {
        ConfigError::Validation(
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    })?;

    Ok(config)
}

/// Apply environment overrides on top of file or default configuration.
///
/// `PORT` replaces the port of `listener.bind_address`; an unparsable value
/// is logged and ignored.
pub fn apply_env_overrides(config: &mut ServiceConfig) {
    if let Ok(value) = std::env::var("PORT") {
        apply_port(config, &value);
    }
}

fn apply_port(config: &mut ServiceConfig, value: &str) {
    match value.parse::<u16>() {
        Ok(port) => {
            let host = config
                .listener
                .bind_address
                .rsplit_once(':')
                .map_or("0.0.0.0", |(host, _)| host);
            config.listener.bind_address = format!("{host}:{port}");
        }
        Err(e) => {
            tracing::warn!(value, error = %e, "ignoring invalid PORT override");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_override_keeps_the_host() {
        let mut config = ServiceConfig::default();
        apply_port(&mut config, "9999");
        assert_eq!(config.listener.bind_address, "0.0.0.0:9999");
    }

    #[test]
    fn invalid_port_is_ignored() {
        let mut config = ServiceConfig::default();
        apply_port(&mut config, "not-a-port");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn load_rejects_semantically_invalid_file() {
        let path = std::env::temp_dir().join("user-service-invalid-config.toml");
        fs::write(&path, "[shutdown]\ndrain_secs = 0\n").unwrap();

        let result = load_config(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_reads_a_valid_file() {
        let path = std::env::temp_dir().join("user-service-valid-config.toml");
        fs::write(&path, "[listener]\nbind_address = \"127.0.0.1:9000\"\n").unwrap();

        let config = load_config(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
    }
}
