use crate::errors::SpellwatchError;

/// Failure reaching the backend at all.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request to '{url}' failed: {message}")]
    RequestFailed { url: String, message: String },

    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },
}

impl SpellwatchError for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            TransportError::RequestFailed { .. } => "TRANSPORT_REQUEST_FAILED",
            TransportError::Timeout { .. } => "TRANSPORT_TIMEOUT",
            TransportError::ClientBuild { .. } => "TRANSPORT_CLIENT_BUILD",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend did not recognize the username at login.
    #[error("{message}")]
    Auth { message: String },

    /// An authenticated call was answered with 401. The session has
    /// already been cleared and the client sent to the login route.
    #[error("Session is no longer authorized")]
    AuthorityLost,

    /// Network failure or a non-401 error status. The next poll retries.
    #[error("Request failed: {message}")]
    Transient { message: String },

    /// The backend refused a cast.
    #[error("{detail}")]
    Rejected { detail: String },
}

impl ApiError {
    pub fn transient(message: impl Into<String>) -> Self {
        ApiError::Transient {
            message: message.into(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        ApiError::Transient {
            message: error.to_string(),
        }
    }
}

impl SpellwatchError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Auth { .. } => "API_AUTH_FAILED",
            ApiError::AuthorityLost => "API_AUTHORITY_LOST",
            ApiError::Transient { .. } => "API_TRANSIENT",
            ApiError::Rejected { .. } => "API_REJECTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ApiError::Auth { .. } | ApiError::Rejected { .. })
    }
}
