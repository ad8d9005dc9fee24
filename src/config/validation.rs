//! Semantic configuration checks.
//!
//! Serde guarantees the shape; this module checks the values make sense
//! together before the service starts.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic configuration problem.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("timeouts.read_secs ({read}) must not exceed timeouts.request_secs ({request})")]
    TimeoutOrder { read: u64, request: u64 },

    #[error("shutdown.drain_secs must be greater than zero")]
    ZeroDrain,
}

/// Validate a deserialized configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.read_secs > config.timeouts.request_secs {
        errors.push(ValidationError::TimeoutOrder {
            read: config.timeouts.read_secs,
            request: config.timeouts.request_secs,
        });
    }

    if config.shutdown.drain_secs == 0 {
        errors.push(ValidationError::ZeroDrain);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_problem() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "nonsense".to_string();
        config.timeouts.read_secs = 30;
        config.shutdown.drain_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_read_timeout_above_request_timeout() {
        let mut config = ServiceConfig::default();
        config.timeouts.read_secs = config.timeouts.request_secs + 1;

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::TimeoutOrder { .. }));
    }
}
