//! Axum router configuration with middleware.
//!
//! Routes mirror the stable wire contract consumed by existing clients:
//! flat paths, `session_id` as a query parameter, plain text for `/query`.
//! Middleware: CORS, request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/query", get(handlers::chat::query))
        .route(
            "/new-session",
            get(handlers::session::new_session).post(handlers::session::new_session),
        )
        .route("/get-sessions", get(handlers::session::get_sessions))
        .route(
            "/get-session-history",
            get(handlers::session::get_session_history),
        )
        .route(
            "/delete-session",
            get(handlers::session::delete_session).post(handlers::session::delete_session),
        )
        .route("/rename-session", post(handlers::session::rename_session))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
