//! Background polling for the dashboard route.
//!
//! The poll task runs `Dashboard::start` (auth gate, profile load, then a
//! refresh every poll interval) and lives exactly as long as the dashboard
//! route is active.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use spellwatch_core::{Dashboard, Transport};

/// Handle to a running poll task.
pub struct PollTask {
    cancel: CancellationToken,
    handle: JoinHandle<u64>,
}

impl PollTask {
    /// Spawn the poll task. Cancelling `parent` also stops it.
    pub fn spawn<T: Transport + 'static>(
        dashboard: Arc<Dashboard<T>>,
        parent: &CancellationToken,
    ) -> Self {
        let cancel = parent.child_token();
        let token = cancel.clone();
        let handle = tokio::spawn(async move { dashboard.start(token).await });

        tracing::info!(event = "ui.poll.spawned");
        Self { cancel, handle }
    }

    /// Whether the task is still polling. A revoked session ends it on its own.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(&self) {
        self.cancel.cancel();
        tracing::info!(event = "ui.poll.stopped");
    }
}

impl Drop for PollTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
