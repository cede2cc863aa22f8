use std::collections::BTreeSet;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use super::chart::{ChartHandle, ChartSample};
use crate::api::{AuditTablePayload, ChartPoint, UserProfile};

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_PERMISSIONS_TEXT: &str = "No permissions assigned.";
pub const PROFILE_ERROR_TEXT: &str = "Failed to load profile.";
pub const NO_EVENTS_TEXT: &str = "No events recorded yet.";

/// Visual class of a permission, chosen by substring match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PermissionCategory {
    Casting,
    Reading,
    Other,
}

impl PermissionCategory {
    /// First match wins: casting, then reading, then other.
    pub fn classify(permission: &str) -> Self {
        if permission.contains("cast") {
            PermissionCategory::Casting
        } else if permission.contains("read") {
            PermissionCategory::Reading
        } else {
            PermissionCategory::Other
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            PermissionCategory::Casting => "🪄",
            PermissionCategory::Reading => "📖",
            PermissionCategory::Other => "⚙️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PermissionItem {
    Permission {
        name: String,
        category: PermissionCategory,
    },
    Placeholder(String),
    Error(String),
}

impl PermissionItem {
    pub fn text(&self) -> String {
        match self {
            PermissionItem::Permission { name, category } => {
                format!("{} {}", category.glyph(), name)
            }
            PermissionItem::Placeholder(text) | PermissionItem::Error(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePanel {
    pub name: String,
    pub role: String,
    pub permissions: Vec<PermissionItem>,
}

impl Default for ProfilePanel {
    fn default() -> Self {
        Self {
            name: LOADING_TEXT.to_string(),
            role: LOADING_TEXT.to_string(),
            permissions: vec![PermissionItem::Placeholder(LOADING_TEXT.to_string())],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AuditRow {
    Spell {
        name: String,
        attempts: u64,
        successes: u64,
        failures: u64,
    },
    /// Spans every column.
    Placeholder(String),
    /// Spans every column.
    Error(String),
}

impl AuditRow {
    pub fn cells(&self) -> Vec<String> {
        match self {
            AuditRow::Spell {
                name,
                attempts,
                successes,
                failures,
            } => vec![
                name.clone(),
                attempts.to_string(),
                successes.to_string(),
                failures.to_string(),
            ],
            AuditRow::Placeholder(text) | AuditRow::Error(text) => vec![text.clone()],
        }
    }

    pub fn is_full_width(&self) -> bool {
        !matches!(self, AuditRow::Spell { .. })
    }
}

/// Latest scalar readouts shown next to the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Readouts {
    pub latency_ms: Option<f64>,
    pub events_per_second: Option<f64>,
}

/// In-memory view model of the dashboard.
///
/// Every `render_*` call replaces the content of its panel; nothing
/// accumulates except the chart's rolling window.
pub struct DashboardView {
    profile: ProfilePanel,
    audit_rows: Vec<AuditRow>,
    chart: Option<Box<dyn ChartHandle>>,
    readouts: Readouts,
    fetch_error: Option<String>,
    last_updated: Option<DateTime<Local>>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            profile: ProfilePanel::default(),
            audit_rows: Vec::new(),
            chart: None,
            readouts: Readouts::default(),
            fetch_error: None,
            last_updated: None,
        }
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// View with a chart already attached.
    pub fn with_chart(chart: Box<dyn ChartHandle>) -> Self {
        let mut view = Self::default();
        view.attach_chart(chart);
        view
    }

    pub fn attach_chart(&mut self, chart: Box<dyn ChartHandle>) {
        self.chart = Some(chart);
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn profile(&self) -> &ProfilePanel {
        &self.profile
    }

    pub fn audit_rows(&self) -> &[AuditRow] {
        &self.audit_rows
    }

    pub fn readouts(&self) -> Readouts {
        self.readouts
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn chart_samples(&self) -> Vec<ChartSample> {
        self.chart
            .as_ref()
            .map(|chart| chart.samples())
            .unwrap_or_default()
    }

    pub fn render_profile(&mut self, profile: &UserProfile) {
        self.profile.name = profile.username.clone();
        self.profile.role = profile.role.clone();

        let permissions: BTreeSet<&str> = profile.permissions.iter().map(String::as_str).collect();
        self.profile.permissions = if permissions.is_empty() {
            vec![PermissionItem::Placeholder(NO_PERMISSIONS_TEXT.to_string())]
        } else {
            permissions
                .into_iter()
                .map(|name| PermissionItem::Permission {
                    name: name.to_string(),
                    category: PermissionCategory::classify(name),
                })
                .collect()
        };
    }

    pub fn render_profile_error(&mut self) {
        self.profile.name = "Error".to_string();
        self.profile.role = "Error".to_string();
        self.profile.permissions = vec![PermissionItem::Error(PROFILE_ERROR_TEXT.to_string())];
    }

    pub fn render_audit_table(&mut self, table: &AuditTablePayload) {
        self.audit_rows = match table {
            AuditTablePayload::Failed { error } => {
                vec![AuditRow::Error(format!("Error loading logs: {}", error))]
            }
            AuditTablePayload::Events(events) if events.is_empty() => {
                vec![AuditRow::Placeholder(NO_EVENTS_TEXT.to_string())]
            }
            AuditTablePayload::Events(events) => events
                .iter()
                .map(|(name, counts)| AuditRow::Spell {
                    name: name.clone(),
                    attempts: counts.attempts,
                    successes: counts.successes,
                    failures: counts.failures,
                })
                .collect(),
        };
        self.fetch_error = None;
        self.last_updated = Some(Local::now());
    }

    /// Append a sample labeled with the local wall clock.
    ///
    /// Returns `false` without touching anything when no chart is attached.
    pub fn render_chart(&mut self, point: &ChartPoint) -> bool {
        let label = Local::now().format("%H:%M:%S").to_string();
        self.render_chart_labeled(point, label)
    }

    pub fn render_chart_labeled(&mut self, point: &ChartPoint, label: String) -> bool {
        let Some(chart) = self.chart.as_mut() else {
            debug!(event = "core.render.chart_not_ready");
            return false;
        };

        chart.append(ChartSample {
            label,
            latency_ms: point.current_latency_ms,
            events_per_second: point.events_per_second,
        });
        self.readouts = Readouts {
            latency_ms: Some(point.current_latency_ms),
            events_per_second: Some(point.events_per_second),
        };
        true
    }

    /// Record a failed refresh. Rendered panels keep their last content.
    pub fn render_fetch_error(&mut self, message: impl Into<String>) {
        self.fetch_error = Some(message.into());
    }

    /// Back to the state of a freshly opened dashboard. The chart stays
    /// attached but empty.
    pub fn reset(&mut self) {
        self.profile = ProfilePanel::default();
        self.audit_rows.clear();
        self.readouts = Readouts::default();
        self.fetch_error = None;
        self.last_updated = None;
        if let Some(chart) = self.chart.as_mut() {
            chart.reset();
        }
    }
}
