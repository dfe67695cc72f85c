//! Session CRUD HTTP handlers.
//!
//! Endpoints:
//! - GET/POST `/new-session`          - Create a session
//! - GET      `/get-sessions`         - List sessions, newest first
//! - GET      `/get-session-history`  - Flattened conversation for a session
//! - GET/POST `/delete-session`       - Delete a session and its history
//! - POST     `/rename-session`       - Rename a session

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use colloquy_types::chat::{Message, Session};

use crate::http::error::AppError;
use crate::http::handlers::{parse_session_id, require_session_id};
use crate::state::AppState;

/// Query parameters carrying an optional session id.
#[derive(Debug, Deserialize)]
pub struct SessionParams {
    pub session_id: Option<String>,
}

/// Body of `/rename-session`, keys camelCased on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    pub session_id: String,
    pub new_name: String,
}

/// GET/POST /new-session - Create a session and return its id.
pub async fn new_session(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let session_id = state.session_service.create_session().await?;
    Ok(Json(json!({ "session_id": session_id })))
}

/// GET /get-sessions - All sessions, newest first.
pub async fn get_sessions(State(state): State<AppState>) -> Result<Json<Vec<Session>>, AppError> {
    let sessions = state.session_service.list_sessions().await?;
    Ok(Json(sessions))
}

/// GET /get-session-history - Flattened conversation for a session.
pub async fn get_session_history(
    State(state): State<AppState>,
    Query(params): Query<SessionParams>,
) -> Result<Json<Vec<Message>>, AppError> {
    let session_id = require_session_id(params.session_id.as_deref())?;
    let history = state.chat_service.session_history(session_id).await?;
    Ok(Json(history))
}

/// GET/POST /delete-session - Delete a session and its history.
pub async fn delete_session(
    State(state): State<AppState>,
    Query(params): Query<SessionParams>,
) -> Result<Json<Value>, AppError> {
    let session_id = require_session_id(params.session_id.as_deref())?;
    state.session_service.delete_session(session_id).await?;
    Ok(Json(json!({ "status": "deleted" })))
}

/// POST /rename-session - Rename a session.
pub async fn rename_session(
    State(state): State<AppState>,
    Json(request): Json<RenameRequest>,
) -> Result<Json<Value>, AppError> {
    let session_id = parse_session_id(&request.session_id)?;
    state
        .session_service
        .rename_session(session_id, &request.new_name)
        .await?;
    Ok(Json(json!({ "status": "renamed" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use colloquy_infra::responder::SubprocessResponder;

    async fn test_state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let responder = SubprocessResponder::new("cat", vec![]);
        let state = AppState::init(dir.path(), responder).await.unwrap();
        // Leak tempdir so the database lives for the test
        std::mem::forget(dir);
        state
    }

    fn session_params(session_id: Option<&str>) -> Query<SessionParams> {
        Query(SessionParams {
            session_id: session_id.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_new_session_returns_id() {
        let state = test_state().await;

        let Json(body) = new_session(State(state)).await.unwrap();

        assert!(body["session_id"].as_i64().unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_get_sessions_lists_created_sessions() {
        let state = test_state().await;
        state.session_service.create_session().await.unwrap();
        state.session_service.create_session().await.unwrap();

        let Json(sessions) = get_sessions(State(state)).await.unwrap();

        assert_eq!(sessions.len(), 2);
        assert!(sessions[0].id > sessions[1].id);
    }

    #[tokio::test]
    async fn test_rename_session_round_trip() {
        let state = test_state().await;
        let sid = state.session_service.create_session().await.unwrap();

        rename_session(
            State(state.clone()),
            Json(RenameRequest {
                session_id: sid.to_string(),
                new_name: "Renamed".to_string(),
            }),
        )
        .await
        .unwrap();

        let Json(sessions) = get_sessions(State(state)).await.unwrap();
        assert_eq!(sessions[0].name, "Renamed");
    }

    #[tokio::test]
    async fn test_delete_session_empties_history_endpoint() {
        let state = test_state().await;
        let sid = state.session_service.create_session().await.unwrap();
        state.chat_service.handle_query(sid, "hi").await.unwrap();

        let Json(body) = delete_session(State(state.clone()), session_params(Some(&sid.to_string())))
            .await
            .unwrap();
        assert_eq!(body["status"], "deleted");

        let Json(history) =
            get_session_history(State(state), session_params(Some(&sid.to_string())))
                .await
                .unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_history_requires_session_id() {
        let state = test_state().await;

        let err = get_session_history(State(state), session_params(None))
            .await
            .unwrap_err();

        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
