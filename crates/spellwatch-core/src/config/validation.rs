//! Configuration validation logic.

use crate::config::types::SpellwatchConfig;
use crate::errors::ConfigError;

/// Validate a SpellwatchConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Base URL must use the http or https scheme
/// - Poll interval and request timeout, if set, must be greater than zero
/// - Endpoint paths, if set, must start with `/`
pub fn validate_config(config: &SpellwatchConfig) -> Result<(), ConfigError> {
    let base_url = config.api.base_url();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl { url: base_url });
    }

    if config.poll.interval_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "poll.interval_secs must be greater than 0".to_string(),
        });
    }

    if config.api.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "api.timeout_secs must be greater than 0".to_string(),
        });
    }

    let endpoints = [
        ("login", &config.endpoints.login),
        ("dashboard", &config.endpoints.dashboard),
        ("user_info", &config.endpoints.user_info),
        ("cast", &config.endpoints.cast),
    ];
    for (name, path) in endpoints {
        if let Some(path) = path
            && !path.starts_with('/')
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("endpoints.{} must start with '/', got '{}'", name, path),
            });
        }
    }

    Ok(())
}
