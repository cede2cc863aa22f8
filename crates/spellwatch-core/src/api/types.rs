use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::session::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub role: String,
}

impl From<LoginResponse> for Identity {
    fn from(response: LoginResponse) -> Self {
        Identity::new(response.username, response.role)
    }
}

/// One poll cycle's full dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub table: AuditTablePayload,
    pub chart: ChartPoint,
}

/// The `table` field of a snapshot.
///
/// The backend reports a failed audit query as `{"error": "..."}` in place
/// of the spell map, so the error shape is tried first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditTablePayload {
    Failed { error: String },
    Events(BTreeMap<String, SpellCounts>),
}

impl Default for AuditTablePayload {
    fn default() -> Self {
        AuditTablePayload::Events(BTreeMap::new())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCounts {
    #[serde(default, alias = "INTENTO")]
    pub attempts: u64,
    #[serde(default, alias = "ÉXITO")]
    pub successes: u64,
    #[serde(default, alias = "FALLO")]
    pub failures: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(default, alias = "currentLatencyMs")]
    pub current_latency_ms: f64,
    #[serde(default, alias = "eventsPerSecond")]
    pub events_per_second: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRequest {
    pub spell_name: String,
    pub incantation: String,
}

impl CastRequest {
    /// The incantation is the spell name followed by `!`.
    pub fn for_spell(name: &str) -> Self {
        Self {
            spell_name: name.to_string(),
            incantation: format!("{}!", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastOutcome {
    pub message: String,
    #[serde(default)]
    pub user: Option<String>,
}

/// Failure body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}
