//! Test doubles for the UI crate.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use spellwatch_core::api::{ApiRequest, ApiResponse, TransportError};
use spellwatch_core::config::EndpointsConfig;
use spellwatch_core::{
    ApiClient, Dashboard, DashboardView, Identity, MemorySessionStore, PollLoop, Route,
    RollingChart, Transport,
};

use crate::state::RouteNavigator;

#[derive(Default)]
struct Replies {
    queue: VecDeque<ApiResponse>,
    sent: usize,
}

/// Transport answering from a queue; fails once the queue is empty.
#[derive(Clone, Default)]
pub struct StubTransport {
    replies: Arc<Mutex<Replies>>,
}

impl StubTransport {
    pub fn push(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .queue
            .push_back(ApiResponse::new(status, body));
    }

    pub fn request_count(&self) -> usize {
        self.replies.lock().unwrap().sent
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut replies = self.replies.lock().unwrap();
        replies.sent += 1;
        replies
            .queue
            .pop_front()
            .ok_or(TransportError::RequestFailed {
                url: request.path,
                message: "backend unavailable".to_string(),
            })
    }
}

pub fn dashboard_with(
    signed_in: bool,
) -> (
    Arc<Dashboard<StubTransport>>,
    StubTransport,
    watch::Receiver<Route>,
) {
    let transport = StubTransport::default();
    let store = if signed_in {
        MemorySessionStore::with_identity(&Identity::new("harry_potter", "Auror"))
    } else {
        MemorySessionStore::new()
    };
    let (navigator, routes) = RouteNavigator::new(Route::Dashboard);
    let client = ApiClient::new(
        transport.clone(),
        EndpointsConfig::default(),
        Arc::new(store),
        Arc::new(navigator),
    );
    let dashboard = Dashboard::new(
        client,
        DashboardView::with_chart(Box::new(RollingChart::new())),
        PollLoop::default(),
    );
    (Arc::new(dashboard), transport, routes)
}
