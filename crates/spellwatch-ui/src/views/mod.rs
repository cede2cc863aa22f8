//! View components for spellwatch-ui.
//!
//! Every view is a pure function of `AppState` and the core view model,
//! drawn into a ratatui `Frame`.

pub mod audit_table;
pub mod chart_panel;
pub mod dashboard_view;
pub mod login_view;
pub mod profile_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use spellwatch_core::{DashboardView, Route};

use crate::state::AppState;

pub fn draw(frame: &mut Frame, app: &AppState, view: &DashboardView) {
    match app.route() {
        Route::Login => login_view::draw(frame, app),
        Route::Dashboard => dashboard_view::draw(frame, app, view),
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
