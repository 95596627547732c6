use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a forms API call.
///
/// `Display` is always the human-readable message the views show; the UI
/// never branches on anything but that text, except for the 404 check the
/// edit view uses to word its "not found" state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// A 2xx response whose body was not the expected JSON (or was missing).
    #[error("{0}")]
    Malformed(String),
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Http { message, .. } => message,
            ApiError::Malformed(message) | ApiError::Network(message) => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Error body convention shared with the REST backend: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
