//! Errors produced while building requests or interpreting responses.
//!
//! The server reports its own failures as `{"message": ...}` with 404 or
//! 400; those get dedicated variants carrying the message so callers can tell
//! "Car not found" from "Task not found" without re-parsing the body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 with the server's message.
    #[error("not found: {0}")]
    NotFound(String),

    /// 400 with the server's message.
    #[error("rejected: {0}")]
    Validation(String),

    /// Any other status the operation did not expect.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound(message) | ApiError::Validation(message) => Some(message),
            _ => None,
        }
    }
}
