//! Test doubles shared by the unit tests of this crate.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::api::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::auth::{Navigator, Route};

/// Navigator that records every route it is sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

enum Scripted {
    Response(ApiResponse),
    Delayed(Duration, ApiResponse),
    Failure(String),
}

#[derive(Default)]
struct Script {
    queue: VecDeque<Scripted>,
    fallback: Option<ApiResponse>,
    requests: Vec<ApiRequest>,
}

/// Transport that replays queued responses in order.
///
/// Once the queue is empty it answers with the fallback response, or fails
/// when none is set. Clones share the same script.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.script
            .lock()
            .unwrap()
            .queue
            .push_back(Scripted::Response(ApiResponse::new(status, body)));
    }

    /// Queue a response that arrives only after `delay` of tokio time.
    pub fn push_delayed(&self, delay: Duration, status: u16, body: &str) {
        self.script
            .lock()
            .unwrap()
            .queue
            .push_back(Scripted::Delayed(delay, ApiResponse::new(status, body)));
    }

    pub fn push_failure(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .queue
            .push_back(Scripted::Failure(message.to_string()));
    }

    pub fn set_fallback(&self, status: u16, body: &str) {
        self.script.lock().unwrap().fallback = Some(ApiResponse::new(status, body));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    /// Requests sent to `path`, in order.
    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let path = request.path.clone();
        let (delay, reply) = {
            let mut script = self.script.lock().unwrap();
            script.requests.push(request);

            match script.queue.pop_front() {
                Some(Scripted::Response(response)) => (None, Ok(response)),
                Some(Scripted::Delayed(delay, response)) => (Some(delay), Ok(response)),
                Some(Scripted::Failure(message)) => (
                    None,
                    Err(TransportError::RequestFailed {
                        url: path,
                        message,
                    }),
                ),
                None => (
                    None,
                    script.fallback.clone().ok_or(TransportError::RequestFailed {
                        url: path,
                        message: "no scripted response".to_string(),
                    }),
                ),
            }
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        reply
    }
}
