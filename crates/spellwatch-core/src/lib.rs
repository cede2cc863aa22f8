//! spellwatch-core: Core library for the spell-audit dashboard client
//!
//! This library signs a user in against the dashboard backend, polls the
//! audit and metrics API and keeps a view model of the dashboard up to
//! date. It is used by both the CLI and the terminal UI.
//!
//! # Main Entry Points
//!
//! - [`dashboard`] - Gate, profile load, polling and user actions
//! - [`login`] - Sign in and persist the identity
//! - [`api`] - Backend client and wire types
//! - [`session`] - Where the signed-in identity lives
//! - [`config`] - Configuration management

pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod logging;
pub mod login;
pub mod poll;
pub mod render;
pub mod session;

#[cfg(test)]
mod testing;

// Re-export commonly used types at crate root for convenience
pub use api::{
    ApiClient, ApiError, AuditTablePayload, CastOutcome, ChartPoint, DashboardSnapshot,
    HttpTransport, Polled, Transport, UserProfile,
};
pub use auth::{Navigator, Route};
pub use config::SpellwatchConfig;
pub use dashboard::Dashboard;
pub use login::{LoginError, LoginFlow};
pub use poll::{PollLoop, PollState};
pub use render::{DashboardView, RollingChart};
pub use session::{FileSessionStore, Identity, MemorySessionStore, SessionStore};

// Re-export logging initialization
pub use logging::{init_file_logging, init_logging};
