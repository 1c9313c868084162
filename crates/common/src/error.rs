//! Common error types and handling for Chatline

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Domain error surfaced by the chat service to the HTTP boundary.
///
/// `InvalidArgument` and `NotFound` display as their bare message so callers
/// see exactly which rule failed ("title cannot be empty", "chat not found").
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Database(_) | Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidArgument(_) => "INVALID_ARGUMENT",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Database(_) => "DATABASE_ERROR",
            Error::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Whether this error comes from the persistence layer
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Error::Database(_) | Error::Storage(_))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Storage details stay in the logs, clients get a generic message
        let message = if self.is_storage_failure() {
            tracing::error!(error = %self, "Internal server error");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
