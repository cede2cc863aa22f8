//! Configuration type definitions for spellwatch.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so that a project config can override a single value without
//! clobbering the rest of the user config.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000"
//! timeout_secs = 10
//!
//! [endpoints]
//! dashboard = "/api/dashboard-data"
//!
//! [poll]
//! interval_secs = 5
//!
//! [session]
//! file = "/home/me/.spellwatch/session.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration derived from the environment, not from config files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for all spellwatch data (default: ~/.spellwatch)
    pub spellwatch_dir: PathBuf,
}

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.spellwatch/config.toml`
/// 2. Project config: `./.spellwatch/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpellwatchConfig {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Backend endpoint paths
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    /// Dashboard polling
    #[serde(default)]
    pub poll: PollConfig,

    /// Where the signed-in identity is kept
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://127.0.0.1:8000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    /// Default: 10 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Endpoint paths, relative to the base URL.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EndpointsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
}

/// Dashboard polling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PollConfig {
    /// Interval in seconds between dashboard refreshes.
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,
}

/// Session storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Path of the session file.
    /// Default: `~/.spellwatch/session.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}
