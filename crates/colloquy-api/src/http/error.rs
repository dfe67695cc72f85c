//! Application error type mapping to HTTP status codes and envelope format.
//!
//! Every error leaves the server as
//! `{"code": <status>, "message": <internal>, "user_message": <generic>}`,
//! logged internally with the full detail while the client gets the generic
//! user-facing line.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use colloquy_types::error::{GatewayError, QueryError, StorageError};

/// Generic user-facing line; internal detail stays in the logs and the
/// `message` field.
const GENERIC_USER_MESSAGE: &str = "An unexpected error has occurred.";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed request parameter.
    Validation(String),
    /// Persistence fault.
    Storage(StorageError),
    /// External responder fault.
    Gateway(GatewayError),
    /// Generic internal error.
    Internal(String),
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::Storage(e)
    }
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        AppError::Gateway(e)
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::Storage(e) => AppError::Storage(e),
            QueryError::Gateway(e) => AppError::Gateway(e),
        }
    }
}

impl AppError {
    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Gateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(msg) | AppError::Internal(msg) => msg.clone(),
            AppError::Storage(e) => e.to_string(),
            AppError::Gateway(e) => e.to_string(),
        };

        tracing::error!(status = status.as_u16(), %message, "request failed");

        let body = json!({
            "code": status.as_u16(),
            "message": message,
            "user_message": GENERIC_USER_MESSAGE,
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let resp = AppError::Validation("session_id is required".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_maps_to_500() {
        let resp = AppError::from(StorageError::Connection).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_gateway_maps_to_502() {
        let err = QueryError::Gateway(GatewayError::InvalidUtf8);
        let resp = AppError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
