//! Request failures and their HTTP mapping.
//!
//! Only two kinds exist: a referenced entity is missing (or fails a parent
//! scope check) and a payload field is missing or mistyped. Both render as a
//! `{"message": ...}` body, the same shape used for delete confirmations.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `{"message": "..."}` body shared by error responses and delete confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// 404. The entity does not exist, or exists under a different parent.
    #[error("{0}")]
    NotFound(&'static str),

    /// 400. A required field is missing or a field has the wrong type.
    #[error("{0}")]
    Validation(&'static str),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");
        (status, Json(Message::new(self.to_string()))).into_response()
    }
}
