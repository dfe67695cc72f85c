//! SQLite session repository implementation.
//!
//! Single-statement CRUD for the session directory. The one exception is
//! `delete_session`, which removes the session's history and the session row
//! inside a transaction so no orphaned turns survive a partial failure.

use colloquy_core::session::repository::SessionRepository;
use colloquy_types::chat::Session;
use colloquy_types::error::StorageError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::storage_err;

/// SQLite-backed implementation of `SessionRepository`.
pub struct SqliteSessionRepository {
    pool: DatabasePool,
}

impl SqliteSessionRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl SessionRepository for SqliteSessionRepository {
    async fn create_session(&self) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO sessions DEFAULT VALUES")
            .execute(&self.pool.writer)
            .await
            .map_err(storage_err)?;

        Ok(result.last_insert_rowid())
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, StorageError> {
        let rows = sqlx::query("SELECT session_id, name FROM sessions ORDER BY session_id DESC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(storage_err)?;

        let mut sessions = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: i64 = row
                .try_get("session_id")
                .map_err(storage_err)?;
            let name: String = row
                .try_get("name")
                .map_err(storage_err)?;
            sessions.push(Session { id, name });
        }

        Ok(sessions)
    }

    async fn rename_session(&self, session_id: i64, new_name: &str) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE sessions SET name = ? WHERE session_id = ?")
            .bind(new_name)
            .bind(session_id)
            .execute(&self.pool.writer)
            .await
            .map_err(storage_err)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn delete_session(&self, session_id: i64) -> Result<(), StorageError> {
        // Transaction: DELETE history rows + DELETE session row. Either both
        // land or the session stays visible with its history intact.
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(storage_err)?;

        sqlx::query("DELETE FROM history WHERE session_id = ?")
            .bind(session_id)
            .execute(&mut *tx)
            .await
            .map_err(storage_err)?;

        sqlx::query("DELETE FROM sessions WHERE session_id = ?")
            .bind(session_id)
            .execute(&mut *tx)
            .await
            .map_err(storage_err)?;

        tx.commit()
            .await
            .map_err(storage_err)?;

        Ok(())
    }
}
