use crate::errors::SpellwatchError;

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to read session store at '{path}': {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to write session store at '{path}': {message}")]
    WriteFailed { path: String, message: String },
}

impl SpellwatchError for SessionStoreError {
    fn error_code(&self) -> &'static str {
        match self {
            SessionStoreError::ReadFailed { .. } => "SESSION_STORE_READ_FAILED",
            SessionStoreError::WriteFailed { .. } => "SESSION_STORE_WRITE_FAILED",
        }
    }
}
