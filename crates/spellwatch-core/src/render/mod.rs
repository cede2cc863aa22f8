//! Render Layer: API payloads into the dashboard view model.

pub mod chart;
pub mod view;

pub use chart::{ChartHandle, ChartSample, MAX_CHART_POINTS, RollingChart};
pub use view::{
    AuditRow, DashboardView, NO_EVENTS_TEXT, NO_PERMISSIONS_TEXT, PROFILE_ERROR_TEXT,
    PermissionCategory, PermissionItem, ProfilePanel, Readouts,
};
