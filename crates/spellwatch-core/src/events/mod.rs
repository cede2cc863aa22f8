//! Lifecycle events shared by the CLI and the terminal UI.

use tracing::{error, info};

/// Which binary is running, recorded on every lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    Cli,
    Ui,
}

impl Frontend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frontend::Cli => "cli",
            Frontend::Ui => "ui",
        }
    }
}

pub fn log_app_startup(frontend: Frontend) {
    info!(
        event = "core.app.startup_completed",
        frontend = frontend.as_str(),
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown(frontend: Frontend) {
    info!(event = "core.app.shutdown_started", frontend = frontend.as_str());
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// The signed-in user changed: `Some` after a login, `None` after a
/// logout or a revoked session.
pub fn log_session_changed(username: Option<&str>) {
    match username {
        Some(username) => info!(event = "core.session.signed_in", username = username),
        None => info!(event = "core.session.signed_out"),
    }
}
