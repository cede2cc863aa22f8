//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.spellwatch/config.toml` (global user preferences)
//! 3. **Project config** - `./.spellwatch/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::config::types::{
    ApiConfig, EndpointsConfig, PollConfig, SessionConfig, SpellwatchConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<SpellwatchConfig, Box<dyn std::error::Error>> {
    let mut config = SpellwatchConfig::default();

    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {}
    }

    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {}
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.spellwatch/config.toml.
fn load_user_config() -> Result<SpellwatchConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".spellwatch").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.spellwatch/config.toml.
fn load_project_config() -> Result<SpellwatchConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?
        .join(".spellwatch")
        .join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
///
/// A missing file surfaces the raw `io::Error` so callers can tell it
/// apart from a parse failure.
pub fn load_config_file(path: &Path) -> Result<SpellwatchConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: SpellwatchConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Every field is optional, so an override only replaces values it sets.
pub fn merge_configs(base: SpellwatchConfig, override_config: SpellwatchConfig) -> SpellwatchConfig {
    SpellwatchConfig {
        api: ApiConfig {
            base_url: override_config.api.base_url.or(base.api.base_url),
            timeout_secs: override_config.api.timeout_secs.or(base.api.timeout_secs),
        },
        endpoints: EndpointsConfig {
            login: override_config.endpoints.login.or(base.endpoints.login),
            dashboard: override_config
                .endpoints
                .dashboard
                .or(base.endpoints.dashboard),
            user_info: override_config
                .endpoints
                .user_info
                .or(base.endpoints.user_info),
            cast: override_config.endpoints.cast.or(base.endpoints.cast),
        },
        poll: PollConfig {
            interval_secs: override_config
                .poll
                .interval_secs
                .or(base.poll.interval_secs),
        },
        session: SessionConfig {
            file: override_config.session.file.or(base.session.file),
        },
    }
}
