//! HTTP layer for Colloquy.
//!
//! Axum-based surface exposing the query pipeline and session CRUD with
//! CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
