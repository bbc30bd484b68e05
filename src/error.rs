//! Relay error types with HTTP status code mapping.
//!
//! [`RelayError`] is the central error type for the relay. Variants that can
//! reach an HTTP client map to a status code and a structured JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::ConnectionId;

/// Structured JSON error response body.
///
/// ```json
/// {
///   "error": {
///     "code": 3002,
///     "message": "dispatcher unavailable"
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Relay error enum.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                 |
/// |-----------|------------|-----------------------------|
/// | 1000–1999 | Startup    | 500 Internal Server Error   |
/// | 2000–2999 | Connection | 410 Gone                    |
/// | 3000–3999 | Server     | 500 / 503                   |
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The listener could not be bound.
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    /// The HTTP server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The console reader thread could not be started.
    #[error("console error: {0}")]
    Console(#[source] std::io::Error),

    /// The connection's socket task has already exited.
    #[error("connection {0} is closed")]
    ConnectionClosed(ConnectionId),

    /// The dispatcher task is no longer receiving events.
    #[error("dispatcher unavailable")]
    DispatcherUnavailable,
}

impl RelayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Config(_) => 1001,
            Self::Bind(_) => 1002,
            Self::Console(_) => 1003,
            Self::ConnectionClosed(_) => 2001,
            Self::Serve(_) => 3001,
            Self::DispatcherUnavailable => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ConnectionClosed(_) => StatusCode::GONE,
            Self::DispatcherUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Config(_) | Self::Bind(_) | Self::Serve(_) | Self::Console(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
