//! API Errors
//!
//! Failures surfaced by the todo API wrappers.

use std::fmt;

pub type ApiResult<T> = Result<T, ApiError>;

/// Why a request to the todo API failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed
    Transport(String),
    /// The server answered with a non-2xx status
    Status(u16),
    /// The response body was not the expected JSON
    Decode(String),
}

impl ApiError {
    /// True when the server was reached but refused the request
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status(_))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected status: {}", code),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
