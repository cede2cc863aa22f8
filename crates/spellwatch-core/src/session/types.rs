use serde::{Deserialize, Serialize};

/// Storage key holding the signed-in username.
pub const USERNAME_KEY: &str = "magic_user_username";
/// Storage key holding the signed-in role.
pub const ROLE_KEY: &str = "magic_user_role";

/// Header carrying the username on authenticated requests.
pub const USERNAME_HEADER: &str = "X-User-Username";
/// Header carrying the role on authenticated requests.
pub const ROLE_HEADER: &str = "X-User-Role";

/// The username/role pair handed back by the backend at login.
///
/// Opaque to the client beyond display and header passthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub role: String,
}

impl Identity {
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
        }
    }

    /// Assemble an identity from stored parts.
    ///
    /// Both parts must be present and non-empty; a partial identity is
    /// treated as absent.
    pub fn from_parts(username: Option<String>, role: Option<String>) -> Option<Self> {
        match (username, role) {
            (Some(username), Some(role)) if !username.is_empty() && !role.is_empty() => {
                Some(Self { username, role })
            }
            _ => None,
        }
    }
}
