//! Poll Loop: drives a refresh tick on a fixed period.
//!
//! Ticks run one at a time. The next tick is not scheduled until the
//! previous one has settled, so renders are applied in issue order even
//! when the backend is slower than the period.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::defaults::DEFAULT_POLL_INTERVAL_SECS;

/// Default interval between dashboard refreshes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Polling,
}

#[derive(Debug, Clone)]
pub struct PollLoop {
    period: Duration,
    polling: Arc<AtomicBool>,
}

impl Default for PollLoop {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl PollLoop {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            polling: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> PollState {
        if self.polling.load(Ordering::SeqCst) {
            PollState::Polling
        } else {
            PollState::Idle
        }
    }

    /// Run `tick` immediately, then once per period until `cancel` fires.
    ///
    /// A failed tick is logged and the loop carries on. An in-flight tick
    /// is dropped on cancellation. Returns the number of ticks started.
    pub async fn run<F, Fut, E>(&self, mut tick: F, cancel: CancellationToken) -> u64
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: std::fmt::Display,
    {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.polling.store(true, Ordering::SeqCst);
        info!(
            event = "core.poll.started",
            period_secs = self.period.as_secs_f64()
        );

        let mut ticks: u64 = 0;
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {}
            }

            ticks += 1;
            debug!(event = "core.poll.tick_started", tick = ticks);

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                outcome = tick() => outcome,
            };

            if let Err(e) = outcome {
                warn!(event = "core.poll.tick_failed", tick = ticks, error = %e);
            }
        }

        self.polling.store(false, Ordering::SeqCst);
        info!(event = "core.poll.stopped", ticks = ticks);
        ticks
    }
}
