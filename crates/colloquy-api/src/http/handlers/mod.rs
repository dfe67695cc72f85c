//! HTTP request handlers.

pub mod chat;
pub mod session;

use crate::http::error::AppError;

/// Parse a session id from its wire form, mapping failures to a 400.
///
/// Session ids travel as strings (query params, the rename body) even though
/// they are integers in storage.
pub(crate) fn parse_session_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::Validation(format!("invalid session_id: '{raw}'")))
}

/// Require a `session_id` parameter and parse it.
pub(crate) fn require_session_id(raw: Option<&str>) -> Result<i64, AppError> {
    match raw {
        Some(raw) if !raw.is_empty() => parse_session_id(raw),
        _ => Err(AppError::Validation("session_id is required".to_string())),
    }
}
