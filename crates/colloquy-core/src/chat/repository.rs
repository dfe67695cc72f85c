//! HistoryRepository trait definition.
//!
//! Durable, ordered turn storage keyed by session. Follows the same RPITIT
//! pattern as `SessionRepository`.

use colloquy_types::chat::{Message, Turn};
use colloquy_types::error::StorageError;

/// Repository trait for per-session turn persistence.
///
/// Implementations live in colloquy-infra (e.g., `SqliteHistoryRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait HistoryRepository: Send + Sync {
    /// Insert one turn, assigning it the next sequence position for the
    /// session.
    fn append_turn(
        &self,
        session_id: i64,
        user_input: &str,
        ai_response: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// The flattened ordered conversation for a session, oldest turn first.
    ///
    /// Returns an empty sequence (not an error) for a session with no turns
    /// or an unknown session id.
    fn read_conversation(
        &self,
        session_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, StorageError>> + Send;

    /// Raw stored turns for a session, oldest first.
    fn turns(
        &self,
        session_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Turn>, StorageError>> + Send;

    /// Number of turns stored for a session.
    fn count_turns(
        &self,
        session_id: i64,
    ) -> impl std::future::Future<Output = Result<u64, StorageError>> + Send;
}
