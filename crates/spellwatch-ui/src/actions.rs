//! Handlers for user actions in spellwatch-ui.
//!
//! Network-bound actions run as tasks and report back through the UI
//! message channel so the draw loop never waits on the backend.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use spellwatch_core::{Dashboard, LoginFlow, Transport};

use crate::state::UiMessage;

pub fn spawn_login<T: Transport + 'static>(
    dashboard: Arc<Dashboard<T>>,
    username: String,
    tx: UnboundedSender<UiMessage>,
) {
    tracing::info!(event = "ui.login.started", username = username);

    tokio::spawn(async move {
        let flow = LoginFlow::new(dashboard.client());
        let result = match flow.submit(&username).await {
            Ok(identity) => {
                tracing::info!(event = "ui.login.completed", username = identity.username);
                Ok(identity.username)
            }
            Err(e) => {
                tracing::warn!(event = "ui.login.failed", error = %e);
                Err(e.to_string())
            }
        };
        let _ = tx.send(UiMessage::LoginFinished(result));
    });
}

pub fn spawn_cast<T: Transport + 'static>(
    dashboard: Arc<Dashboard<T>>,
    spell: String,
    tx: UnboundedSender<UiMessage>,
) {
    tracing::info!(event = "ui.cast.started", spell = spell);

    tokio::spawn(async move {
        let result = match dashboard.cast(&spell).await {
            Ok(outcome) => {
                tracing::info!(event = "ui.cast.completed", spell = spell);
                Ok(outcome.message)
            }
            Err(e) => {
                tracing::warn!(event = "ui.cast.failed", spell = spell, error = %e);
                Err(e.to_string())
            }
        };
        let _ = tx.send(UiMessage::CastFinished(result));
    });
}

pub fn spawn_refresh<T: Transport + 'static>(
    dashboard: Arc<Dashboard<T>>,
    tx: UnboundedSender<UiMessage>,
) {
    tokio::spawn(async move {
        let result = dashboard
            .refresh()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string());
        let _ = tx.send(UiMessage::RefreshFinished(result));
    });
}

/// Sign out. Navigation back to the login route happens through the
/// dashboard's navigator.
pub fn logout<T: Transport>(dashboard: &Dashboard<T>) -> Result<(), String> {
    dashboard.logout().map_err(|e| {
        tracing::error!(event = "ui.logout.failed", error = %e);
        e.to_string()
    })
}
