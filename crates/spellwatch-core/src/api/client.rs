use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::errors::ApiError;
use super::transport::{ApiRequest, ApiResponse, Transport};
use super::types::{
    CastOutcome, CastRequest, DashboardSnapshot, ErrorDetail, LoginRequest, LoginResponse,
    UserProfile,
};
use crate::auth::{Navigator, Route};
use crate::config::EndpointsConfig;
use crate::events;
use crate::session::{Identity, SessionStore, identity_headers};

const UNKNOWN_ERROR: &str = "Unknown error";

/// Result of an authenticated fetch.
///
/// `SignedOut` means the backend revoked the session: the store has been
/// cleared and the client sent to the login route. Callers treat it as a
/// normal, silent end of the operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Polled<T> {
    Fresh(T),
    SignedOut,
}

impl<T> Polled<T> {
    pub fn fresh(self) -> Option<T> {
        match self {
            Polled::Fresh(value) => Some(value),
            Polled::SignedOut => None,
        }
    }
}

/// Client for the dashboard backend.
///
/// Identity headers are read from the session store on every request, so
/// a login or logout elsewhere takes effect on the next call.
pub struct ApiClient<T: Transport> {
    transport: T,
    endpoints: EndpointsConfig,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(
        transport: T,
        endpoints: EndpointsConfig,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            endpoints,
            store,
            navigator,
        }
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Exchange a username for an identity.
    ///
    /// The identity is returned, not stored; persisting it is the caller's
    /// decision.
    pub async fn login(&self, username: &str) -> Result<Identity, ApiError> {
        let request_id = Uuid::new_v4();
        info!(
            event = "core.api.login_started",
            request_id = %request_id,
            username = username
        );

        let body = serde_json::to_value(LoginRequest {
            username: username.to_string(),
        })
        .map_err(|e| ApiError::transient(e.to_string()))?;

        let response = self
            .send(request_id, ApiRequest::post(self.endpoints.login(), body))
            .await?;

        if !response.is_success() {
            let message = detail_or_unknown(&response);
            warn!(
                event = "core.api.login_failed",
                request_id = %request_id,
                status = response.status,
                message = message
            );
            return Err(ApiError::Auth { message });
        }

        let identity: Identity = parse::<LoginResponse>(request_id, &response)?.into();
        info!(
            event = "core.api.login_completed",
            request_id = %request_id,
            username = identity.username,
            role = identity.role
        );
        Ok(identity)
    }

    pub async fn fetch_dashboard(&self) -> Result<Polled<DashboardSnapshot>, ApiError> {
        self.fetch_authenticated(self.endpoints.dashboard()).await
    }

    pub async fn fetch_user_info(&self) -> Result<Polled<UserProfile>, ApiError> {
        self.fetch_authenticated(self.endpoints.user_info()).await
    }

    /// Cast a spell. A 401 ends the session like any other authenticated
    /// call and is reported as [`ApiError::AuthorityLost`].
    pub async fn cast_action(&self, name: &str) -> Result<CastOutcome, ApiError> {
        let request_id = Uuid::new_v4();
        info!(
            event = "core.api.cast_started",
            request_id = %request_id,
            spell = name
        );

        let body = serde_json::to_value(CastRequest::for_spell(name))
            .map_err(|e| ApiError::transient(e.to_string()))?;
        let request = ApiRequest::post(self.endpoints.cast(), body)
            .with_headers(identity_headers(self.store.as_ref()));

        let response = self.send(request_id, request).await?;

        if response.is_unauthorized() {
            self.lose_authority(request_id);
            return Err(ApiError::AuthorityLost);
        }

        if !response.is_success() {
            let detail = detail_or_unknown(&response);
            warn!(
                event = "core.api.cast_rejected",
                request_id = %request_id,
                spell = name,
                status = response.status,
                detail = detail
            );
            return Err(ApiError::Rejected { detail });
        }

        let outcome: CastOutcome = parse(request_id, &response)?;
        info!(
            event = "core.api.cast_completed",
            request_id = %request_id,
            spell = name,
            message = outcome.message
        );
        Ok(outcome)
    }

    async fn fetch_authenticated<R: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Polled<R>, ApiError> {
        let request_id = Uuid::new_v4();
        let request =
            ApiRequest::get(path).with_headers(identity_headers(self.store.as_ref()));

        let response = self.send(request_id, request).await?;

        if response.is_unauthorized() {
            self.lose_authority(request_id);
            return Ok(Polled::SignedOut);
        }

        if !response.is_success() {
            warn!(
                event = "core.api.fetch_failed",
                request_id = %request_id,
                path = path,
                status = response.status
            );
            return Err(ApiError::Transient {
                message: format!("{} returned status {}", path, response.status),
            });
        }

        parse(request_id, &response).map(Polled::Fresh)
    }

    async fn send(&self, request_id: Uuid, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        debug!(
            event = "core.api.request_started",
            request_id = %request_id,
            method = %request.method,
            path = request.path
        );

        match self.transport.send(request).await {
            Ok(response) => Ok(response),
            Err(e) => {
                warn!(
                    event = "core.api.request_failed",
                    request_id = %request_id,
                    error = %e
                );
                Err(e.into())
            }
        }
    }

    fn lose_authority(&self, request_id: Uuid) {
        warn!(event = "core.api.authority_lost", request_id = %request_id);

        if let Err(e) = self.store.clear() {
            error!(
                event = "core.api.session_clear_failed",
                request_id = %request_id,
                error = %e
            );
        }
        events::log_session_changed(None);
        self.navigator.navigate(Route::Login);
    }
}

fn parse<R: DeserializeOwned>(request_id: Uuid, response: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        warn!(
            event = "core.api.response_parse_failed",
            request_id = %request_id,
            error = %e
        );
        ApiError::transient(format!("Invalid response body: {}", e))
    })
}

fn detail_or_unknown(response: &ApiResponse) -> String {
    serde_json::from_str::<ErrorDetail>(&response.body)
        .ok()
        .and_then(|body| body.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}
