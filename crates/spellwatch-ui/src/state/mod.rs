//! Application state for spellwatch-ui.
//!
//! `AppState` holds the route and input state; the dashboard panels live in
//! the core view model shared with the poll task.

pub mod app_state;
pub mod forms;
pub mod navigator;

pub use app_state::{AppState, StatusMessage, UiAction, UiMessage};
pub use forms::{CastPrompt, LoginFormState};
pub use navigator::RouteNavigator;
