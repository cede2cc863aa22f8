//! Auth Gate and navigation.
//!
//! Navigation is a side effect owned by the front end: the CLI prints a
//! sign-in hint, the terminal dashboard switches its active route.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::session::SessionStore;

/// The two views of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Performs the navigation side effect.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Check for a signed-in identity before anything else is wired up.
///
/// Returns `false` after navigating to the login route when the session
/// store holds no identity; the caller must abort initialization so that
/// an unauthenticated session never issues API calls.
pub fn check(store: &dyn SessionStore, navigator: &dyn Navigator) -> bool {
    match store.get() {
        Some(identity) => {
            info!(
                event = "core.auth.gate_passed",
                username = identity.username,
                role = identity.role
            );
            true
        }
        None => {
            info!(event = "core.auth.gate_redirected", route = %Route::Login);
            navigator.navigate(Route::Login);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Identity, MemorySessionStore, ROLE_KEY, USERNAME_KEY};
    use crate::testing::RecordingNavigator;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::Login.to_string(), "/login");
    }

    #[test]
    fn test_gate_redirects_when_absent() {
        let store = MemorySessionStore::new();
        let navigator = RecordingNavigator::default();

        assert!(!check(&store, &navigator));
        assert_eq!(navigator.routes(), vec![Route::Login]);
    }

    #[test]
    fn test_gate_passes_when_present() {
        let store = MemorySessionStore::with_identity(&Identity::new("alice", "Auror"));
        let navigator = RecordingNavigator::default();

        assert!(check(&store, &navigator));
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn test_gate_redirects_iff_absent() {
        let cases: [(Option<&str>, Option<&str>, bool); 5] = [
            (None, None, false),
            (Some("alice"), None, false),
            (Some(""), Some("Auror"), false),
            (Some("alice"), Some("Auror"), true),
            (Some("percy_weasley"), Some("Funcionario"), true),
        ];

        for (username, role, expected) in cases {
            let store = MemorySessionStore::new();
            if let Some(username) = username {
                store.set_item(USERNAME_KEY, username).unwrap();
            }
            if let Some(role) = role {
                store.set_item(ROLE_KEY, role).unwrap();
            }
            let navigator = RecordingNavigator::default();

            assert_eq!(check(&store, &navigator), expected);
            assert_eq!(
                navigator.routes().contains(&Route::Login),
                store.get().is_none(),
                "redirect must happen exactly when the store is absent ({:?}, {:?})",
                username,
                role
            );
        }
    }
}
