use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors reported by registry backends.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("short code already maps to a different url: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors reported by the shorten and resolve workflows.
///
/// Storage failures propagate here instead of being swallowed, so callers
/// can tell "code returned and persisted" from "backend broken".
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("long url cannot be empty")]
    EmptyUrl,
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortCode(message) => Self::InvalidShortCode(message),
        }
    }
}
