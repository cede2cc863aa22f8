//! Default values for configuration types.
//!
//! Endpoint defaults match the routes served by the ministry backend.

use crate::config::types::{ApiConfig, Config, EndpointsConfig, PollConfig, SessionConfig};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

pub const DEFAULT_LOGIN_PATH: &str = "/api/login";
pub const DEFAULT_DASHBOARD_PATH: &str = "/api/dashboard-data";
pub const DEFAULT_USER_INFO_PATH: &str = "/api/user-info";
pub const DEFAULT_CAST_PATH: &str = "/hechizos/lanzar";

impl Default for Config {
    fn default() -> Self {
        let spellwatch_dir = match dirs::home_dir() {
            Some(home) => home.join(".spellwatch"),
            None => {
                eprintln!(
                    "Warning: Could not find home directory. Set HOME environment variable. \
                    Using fallback directory."
                );
                std::env::temp_dir().join(".spellwatch")
            }
        };

        Self { spellwatch_dir }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_session_file(&self) -> PathBuf {
        self.spellwatch_dir.join("session.json")
    }

    pub fn ui_log_file(&self) -> PathBuf {
        self.spellwatch_dir.join("ui.log")
    }
}

impl ApiConfig {
    /// Returns the backend base URL without a trailing slash.
    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Returns the request timeout, defaulting to 10 seconds.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

impl EndpointsConfig {
    pub fn login(&self) -> &str {
        self.login.as_deref().unwrap_or(DEFAULT_LOGIN_PATH)
    }

    pub fn dashboard(&self) -> &str {
        self.dashboard.as_deref().unwrap_or(DEFAULT_DASHBOARD_PATH)
    }

    pub fn user_info(&self) -> &str {
        self.user_info.as_deref().unwrap_or(DEFAULT_USER_INFO_PATH)
    }

    pub fn cast(&self) -> &str {
        self.cast.as_deref().unwrap_or(DEFAULT_CAST_PATH)
    }
}

impl PollConfig {
    /// Returns the refresh interval in seconds, defaulting to 5.
    pub fn interval_secs(&self) -> u64 {
        self.interval_secs.unwrap_or(DEFAULT_POLL_INTERVAL_SECS)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs())
    }
}

impl SessionConfig {
    /// Returns the configured session file, or the one under `runtime.spellwatch_dir`.
    pub fn file_or_default(&self, runtime: &Config) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| runtime.default_session_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::SpellwatchConfig;

    #[test]
    fn test_config_default() {
        let config = Config::new();
        assert!(
            config
                .spellwatch_dir
                .to_string_lossy()
                .contains(".spellwatch")
        );
    }

    #[test]
    fn test_config_paths() {
        let config = Config::new();
        assert!(
            config
                .default_session_file()
                .to_string_lossy()
                .ends_with("session.json")
        );
        assert!(config.ui_log_file().to_string_lossy().ends_with("ui.log"));
    }

    #[test]
    fn test_spellwatch_config_defaults() {
        let config = SpellwatchConfig::default();
        assert_eq!(config.api.base_url(), "http://127.0.0.1:8000");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.poll.interval_secs(), 5);
        assert_eq!(config.endpoints.login(), "/api/login");
        assert_eq!(config.endpoints.dashboard(), "/api/dashboard-data");
        assert_eq!(config.endpoints.user_info(), "/api/user-info");
        assert_eq!(config.endpoints.cast(), "/hechizos/lanzar");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut config = SpellwatchConfig::default();
        config.api.base_url = Some("http://ministry.local:8000/".to_string());
        assert_eq!(config.api.base_url(), "http://ministry.local:8000");
    }

    #[test]
    fn test_session_file_override() {
        let runtime = Config {
            spellwatch_dir: PathBuf::from("/tmp/sw"),
        };
        let mut session = SessionConfig::default();
        assert_eq!(
            session.file_or_default(&runtime),
            PathBuf::from("/tmp/sw/session.json")
        );

        session.file = Some(PathBuf::from("/var/lib/sw/identity.json"));
        assert_eq!(
            session.file_or_default(&runtime),
            PathBuf::from("/var/lib/sw/identity.json")
        );
    }

    #[test]
    fn test_explicit_zero_interval_preserved() {
        let config: SpellwatchConfig = toml::from_str(
            r#"
[poll]
interval_secs = 0
"#,
        )
        .unwrap();
        // Validation rejects it later; parsing keeps what was written.
        assert_eq!(config.poll.interval_secs(), 0);
    }
}
