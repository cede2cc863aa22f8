//! Dashboard controller.
//!
//! Owns the API client and the shared view model and wires the auth gate,
//! the profile load, the poll loop and user actions together. Front ends
//! hold a clone of [`Dashboard::view`] and draw it whenever they like.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError, CastOutcome, Polled, Transport};
use crate::auth::{self, Route};
use crate::events;
use crate::poll::PollLoop;
use crate::render::DashboardView;
use crate::session::SessionStoreError;

pub struct Dashboard<T: Transport> {
    client: ApiClient<T>,
    view: Arc<Mutex<DashboardView>>,
    poll: PollLoop,
}

impl<T: Transport> Dashboard<T> {
    pub fn new(client: ApiClient<T>, view: DashboardView, poll: PollLoop) -> Self {
        Self {
            client,
            view: Arc::new(Mutex::new(view)),
            poll,
        }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn view(&self) -> Arc<Mutex<DashboardView>> {
        self.view.clone()
    }

    pub fn poll(&self) -> &PollLoop {
        &self.poll
    }

    fn lock_view(&self) -> MutexGuard<'_, DashboardView> {
        match self.view.lock() {
            Ok(view) => view,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Run the auth gate. `false` means the caller must not go on.
    pub fn init(&self) -> bool {
        auth::check(self.client.store().as_ref(), self.client.navigator().as_ref())
    }

    /// Fetch and render one snapshot.
    ///
    /// On failure the rendered panels keep their last content and only the
    /// fetch error slot changes.
    pub async fn refresh(&self) -> Result<Polled<()>, ApiError> {
        match self.client.fetch_dashboard().await {
            Ok(Polled::Fresh(snapshot)) => {
                let mut view = self.lock_view();
                view.render_audit_table(&snapshot.table);
                view.render_chart(&snapshot.chart);
                Ok(Polled::Fresh(()))
            }
            Ok(Polled::SignedOut) => Ok(Polled::SignedOut),
            Err(e) => {
                warn!(event = "core.dashboard.refresh_failed", error = %e);
                self.lock_view().render_fetch_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetch the profile once. Failures render the profile error state.
    pub async fn load_profile(&self) -> Result<Polled<()>, ApiError> {
        match self.client.fetch_user_info().await {
            Ok(Polled::Fresh(profile)) => {
                self.lock_view().render_profile(&profile);
                Ok(Polled::Fresh(()))
            }
            Ok(Polled::SignedOut) => Ok(Polled::SignedOut),
            Err(e) => {
                warn!(event = "core.dashboard.profile_failed", error = %e);
                self.lock_view().render_profile_error();
                Err(e)
            }
        }
    }

    /// Cast a spell, then refresh exactly once so the audit table shows the
    /// attempt, whatever the outcome. After a 401 the refresh resolves to
    /// `SignedOut`.
    pub async fn cast(&self, name: &str) -> Result<CastOutcome, ApiError> {
        let result = self.client.cast_action(name).await;

        if let Err(e) = self.refresh().await {
            warn!(event = "core.dashboard.post_cast_refresh_failed", error = %e);
        }
        result
    }

    /// Clear the session, empty the view and go to the login route.
    pub fn logout(&self) -> Result<(), SessionStoreError> {
        info!(event = "core.dashboard.logout_started");

        self.client.store().clear()?;
        self.lock_view().reset();
        events::log_session_changed(None);
        self.client.navigator().navigate(Route::Login);

        info!(event = "core.dashboard.logout_completed");
        Ok(())
    }

    /// Gate, then load the profile alongside the poll loop until `cancel`
    /// fires or the backend ends the session. Returns the number of
    /// refreshes run.
    pub async fn start(&self, cancel: CancellationToken) -> u64 {
        if !self.init() {
            return 0;
        }

        let session = cancel.child_token();

        let profile = async {
            tokio::select! {
                biased;
                _ = session.cancelled() => {}
                // Profile errors are already rendered.
                outcome = self.load_profile() => {
                    if let Ok(Polled::SignedOut) = outcome {
                        session.cancel();
                    }
                }
            }
        };

        let polling = self.poll.run(
            || async {
                let outcome = self.refresh().await;
                if let Ok(Polled::SignedOut) = outcome {
                    session.cancel();
                }
                outcome.map(|_| ())
            },
            session.clone(),
        );

        let ((), ticks) = tokio::join!(profile, polling);

        info!(event = "core.dashboard.stopped", refreshes = ticks);
        ticks
    }
}
