//! Session lifecycle service.
//!
//! Thin passthrough over `SessionRepository`; every operation is a single
//! statement in the store. Kept as a service so the HTTP layer talks to the
//! same kind of seam for sessions as it does for queries.

use colloquy_types::chat::Session;
use colloquy_types::error::StorageError;
use tracing::info;

use crate::session::repository::SessionRepository;

/// Manages session creation, listing, renaming, and deletion.
pub struct SessionService<S: SessionRepository> {
    session_repo: S,
}

impl<S: SessionRepository> SessionService<S> {
    /// Create a new session service with the given repository.
    pub fn new(session_repo: S) -> Self {
        Self { session_repo }
    }

    /// Create a new session and return its id.
    pub async fn create_session(&self) -> Result<i64, StorageError> {
        let id = self.session_repo.create_session().await?;
        info!(session_id = id, "session created");
        Ok(id)
    }

    /// All sessions, newest first.
    pub async fn list_sessions(&self) -> Result<Vec<Session>, StorageError> {
        self.session_repo.list_sessions().await
    }

    /// Rename a session.
    pub async fn rename_session(
        &self,
        session_id: i64,
        new_name: &str,
    ) -> Result<(), StorageError> {
        self.session_repo.rename_session(session_id, new_name).await?;
        info!(session_id, new_name, "session renamed");
        Ok(())
    }

    /// Delete a session and its history.
    pub async fn delete_session(&self, session_id: i64) -> Result<(), StorageError> {
        self.session_repo.delete_session(session_id).await?;
        info!(session_id, "session deleted");
        Ok(())
    }
}
