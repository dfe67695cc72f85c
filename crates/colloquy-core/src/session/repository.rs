//! SessionRepository trait definition.
//!
//! Registry of session identities and display names. Session CRUD is
//! ordinary single-statement persistence; the one sequencing requirement
//! lives in `delete_session`, which must remove the session's turns and the
//! session row atomically.

use colloquy_types::chat::Session;
use colloquy_types::error::StorageError;

/// Repository trait for the session directory.
///
/// Implementations live in colloquy-infra (e.g., `SqliteSessionRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait SessionRepository: Send + Sync {
    /// Create a new session with the default name, returning its id.
    fn create_session(
        &self,
    ) -> impl std::future::Future<Output = Result<i64, StorageError>> + Send;

    /// All sessions, newest id first.
    fn list_sessions(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Session>, StorageError>> + Send;

    /// Update a session's display name.
    fn rename_session(
        &self,
        session_id: i64,
        new_name: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Delete a session and all of its turns.
    ///
    /// Atomic from the caller's point of view: either the session and its
    /// full history are gone, or the session remains visible with its
    /// history intact. No orphaned turns under any failure ordering.
    fn delete_session(
        &self,
        session_id: i64,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}
