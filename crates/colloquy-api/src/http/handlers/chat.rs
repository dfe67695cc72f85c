//! Query pipeline HTTP handler.
//!
//! `GET /query?session_id=..&query=..` runs one read-generate-write cycle
//! and returns the responder's raw output as a plain text body.

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::http::error::AppError;
use crate::http::handlers::require_session_id;
use crate::state::AppState;

/// Query parameters for `/query`.
///
/// `session_id` is required; `query` defaults to the empty string, which is
/// passed through to the responder rather than rejected.
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub session_id: Option<String>,
    #[serde(default)]
    pub query: String,
}

/// GET /query - Execute one user query against a session.
pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Response, AppError> {
    let session_id = require_session_id(params.session_id.as_deref())?;

    let output = state
        .chat_service
        .handle_query(session_id, &params.query)
        .await?;

    // Raw gateway output, byte-for-byte, as plain text.
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        output,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use colloquy_core::chat::repository::HistoryRepository;
    use colloquy_infra::responder::SubprocessResponder;

    async fn test_state(script: &str) -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let responder =
            SubprocessResponder::new("sh", vec!["-c".to_string(), script.to_string()]);
        let state = AppState::init(dir.path(), responder).await.unwrap();
        // Leak tempdir so the database lives for the test
        std::mem::forget(dir);
        state
    }

    fn params(session_id: Option<&str>, query: &str) -> Query<QueryParams> {
        Query(QueryParams {
            session_id: session_id.map(str::to_string),
            query: query.to_string(),
        })
    }

    #[tokio::test]
    async fn test_query_persists_turn_and_returns_plain_text() {
        let state = test_state("cat > /dev/null; printf goodbye").await;
        let sid = state.session_service.create_session().await.unwrap();

        let resp = query(State(state.clone()), params(Some(&sid.to_string()), "bye"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );

        let turns = state.chat_service.history_repo().turns(sid).await.unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].user_input, "bye");
        assert_eq!(turns[0].ai_response, "goodbye");
    }

    #[tokio::test]
    async fn test_query_without_session_id_is_rejected() {
        let state = test_state("cat").await;

        let err = query(State(state), params(None, "hi")).await.unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_failed_responder_persists_nothing() {
        let state = test_state("cat > /dev/null; exit 1").await;
        let sid = state.session_service.create_session().await.unwrap();

        let err = query(State(state.clone()), params(Some(&sid.to_string()), "hi"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            state
                .chat_service
                .history_repo()
                .count_turns(sid)
                .await
                .unwrap(),
            0
        );
    }
}
