//! Login Flow: username in, identity persisted, dashboard route out.

use std::sync::Arc;

use tracing::{error, info};

use crate::api::{ApiClient, ApiError, Transport};
use crate::auth::{Navigator, Route};
use crate::errors::SpellwatchError;
use crate::events;
use crate::session::{Identity, SessionStore, SessionStoreError};

pub const EMPTY_USERNAME_MESSAGE: &str = "Please enter a username.";

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Please enter a username.")]
    EmptyUsername,

    /// Shown inline under the username field.
    #[error("{message}")]
    Rejected { message: String },

    #[error("Could not save session: {source}")]
    Store {
        #[from]
        source: SessionStoreError,
    },
}

impl SpellwatchError for LoginError {
    fn error_code(&self) -> &'static str {
        match self {
            LoginError::EmptyUsername => "LOGIN_EMPTY_USERNAME",
            LoginError::Rejected { .. } => "LOGIN_REJECTED",
            LoginError::Store { .. } => "LOGIN_STORE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            LoginError::EmptyUsername | LoginError::Rejected { .. }
        )
    }
}

impl From<ApiError> for LoginError {
    fn from(error: ApiError) -> Self {
        LoginError::Rejected {
            message: error.to_string(),
        }
    }
}

pub struct LoginFlow<'a, T: Transport> {
    client: &'a ApiClient<T>,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl<'a, T: Transport> LoginFlow<'a, T> {
    /// Flow that persists into and navigates through the client's own
    /// session store and navigator.
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self {
            client,
            store: client.store().clone(),
            navigator: client.navigator().clone(),
        }
    }

    /// Submit the username field.
    ///
    /// An empty or whitespace-only username fails locally without a
    /// request. Anything else is sent as typed. A rejected login leaves the
    /// route unchanged.
    pub async fn submit(&self, username: &str) -> Result<Identity, LoginError> {
        if username.trim().is_empty() {
            info!(event = "core.login.empty_username");
            return Err(LoginError::EmptyUsername);
        }

        let identity = self.client.login(username).await?;

        if let Err(e) = self.store.set(&identity) {
            error!(event = "core.login.store_failed", error = %e);
            return Err(e.into());
        }

        info!(
            event = "core.login.completed",
            username = identity.username,
            role = identity.role
        );
        events::log_session_changed(Some(&identity.username));
        self.navigator.navigate(Route::Dashboard);
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndpointsConfig;
    use crate::session::MemorySessionStore;
    use crate::testing::{RecordingNavigator, ScriptedTransport};

    struct Harness {
        transport: ScriptedTransport,
        store: Arc<MemorySessionStore>,
        navigator: Arc<RecordingNavigator>,
        client: ApiClient<ScriptedTransport>,
    }

    fn harness() -> Harness {
        let transport = ScriptedTransport::new();
        let store = Arc::new(MemorySessionStore::new());
        let navigator = Arc::new(RecordingNavigator::default());
        let client = ApiClient::new(
            transport.clone(),
            EndpointsConfig::default(),
            store.clone(),
            navigator.clone(),
        );
        Harness {
            transport,
            store,
            navigator,
            client,
        }
    }

    #[tokio::test]
    async fn test_empty_username_sends_nothing() {
        let h = harness();
        let flow = LoginFlow::new(&h.client);

        for username in ["", "   "] {
            let error = flow.submit(username).await.unwrap_err();
            assert!(matches!(error, LoginError::EmptyUsername));
            assert_eq!(error.to_string(), EMPTY_USERNAME_MESSAGE);
        }

        assert!(h.transport.requests().is_empty());
        assert!(h.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_accepted_login_persists_and_navigates() {
        let h = harness();
        h.transport
            .push_response(200, r#"{"username": "alice", "role": "Auror"}"#);
        let flow = LoginFlow::new(&h.client);

        let identity = flow.submit("alice").await.unwrap();

        assert_eq!(identity, Identity::new("alice", "Auror"));
        assert_eq!(h.store.get(), Some(Identity::new("alice", "Auror")));
        assert_eq!(h.navigator.routes(), vec![Route::Dashboard]);
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_username_is_sent_as_typed() {
        let h = harness();
        h.transport
            .push_response(200, r#"{"username": "alice", "role": "Auror"}"#);

        LoginFlow::new(&h.client).submit(" alice ").await.unwrap();

        let requests = h.transport.requests();
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({"username": " alice "}))
        );
    }

    #[tokio::test]
    async fn test_stored_role_is_the_returned_role() {
        let h = harness();
        h.transport
            .push_response(200, r#"{"username": "percy_weasley", "role": "Funcionario"}"#);

        LoginFlow::new(&h.client).submit("percy_weasley").await.unwrap();

        assert_eq!(h.store.get().unwrap().role, "Funcionario");
    }

    #[tokio::test]
    async fn test_rejected_login_shows_detail_without_navigating() {
        let h = harness();
        h.transport
            .push_response(404, r#"{"detail": "User 'mallory' not found"}"#);

        let error = LoginFlow::new(&h.client).submit("mallory").await.unwrap_err();

        assert!(matches!(error, LoginError::Rejected { .. }));
        assert_eq!(error.to_string(), "User 'mallory' not found");
        assert!(h.store.get().is_none());
        assert!(h.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_shown_inline() {
        let h = harness();
        h.transport.push_failure("connection refused");

        let error = LoginFlow::new(&h.client).submit("alice").await.unwrap_err();

        assert!(matches!(error, LoginError::Rejected { .. }));
        assert!(error.to_string().contains("connection refused"));
        assert!(h.navigator.routes().is_empty());
    }
}
