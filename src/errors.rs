use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::services::backup_service::BackupError;

/// A lightweight wrapper for general errors that keeps the message local.
///
/// The message is logged, never sent: callers only see the status text.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for a 500 Internal Server Error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(status = self.status.as_u16(), "{}", self.message);
        let text = self.status.canonical_reason().unwrap_or("Error");
        (self.status, text).into_response()
    }
}

impl From<BackupError> for AppError {
    fn from(err: BackupError) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        AppError::internal(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::kind_store::StoreError;

    #[test]
    fn backup_error_keeps_cause_chain_in_message() {
        let err = AppError::from(BackupError::Enumeration(StoreError::Backend(
            "deadline exceeded".into(),
        )));

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.message,
            "could not list datastore kinds: kind scan failed: deadline exceeded"
        );
    }

    #[test]
    fn response_body_is_status_text_only() {
        let response = AppError::internal("secret detail").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
