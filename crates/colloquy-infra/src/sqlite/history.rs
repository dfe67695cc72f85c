//! SQLite history repository implementation.
//!
//! Implements `HistoryRepository` from `colloquy-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, reader pool for
//! SELECTs and writer pool for INSERTs.

use colloquy_core::chat::repository::HistoryRepository;
use colloquy_types::chat::{Message, Turn, flatten_turns};
use colloquy_types::error::StorageError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::storage_err;

/// SQLite-backed implementation of `HistoryRepository`.
pub struct SqliteHistoryRepository {
    pool: DatabasePool,
}

impl SqliteHistoryRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Turn.
struct TurnRow {
    id: i64,
    session_id: i64,
    user_input: String,
    ai_response: String,
}

impl TurnRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            user_input: row.try_get("user_input")?,
            ai_response: row.try_get("ai_response")?,
        })
    }

    fn into_turn(self) -> Turn {
        Turn {
            id: self.id,
            session_id: self.session_id,
            user_input: self.user_input,
            ai_response: self.ai_response,
        }
    }
}

impl HistoryRepository for SqliteHistoryRepository {
    async fn append_turn(
        &self,
        session_id: i64,
        user_input: &str,
        ai_response: &str,
    ) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO history (session_id, user_input, ai_response) VALUES (?, ?, ?)")
            .bind(session_id)
            .bind(user_input)
            .bind(ai_response)
            .execute(&self.pool.writer)
            .await
            .map_err(storage_err)?;

        Ok(())
    }

    async fn read_conversation(&self, session_id: i64) -> Result<Vec<Message>, StorageError> {
        Ok(flatten_turns(&self.turns(session_id).await?))
    }

    async fn turns(&self, session_id: i64) -> Result<Vec<Turn>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, session_id, user_input, ai_response FROM history
             WHERE session_id = ? ORDER BY id ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(storage_err)?;

        let mut turns = Vec::with_capacity(rows.len());
        for row in &rows {
            let turn_row =
                TurnRow::from_row(row).map_err(storage_err)?;
            turns.push(turn_row.into_turn());
        }

        Ok(turns)
    }

    async fn count_turns(&self, session_id: i64) -> Result<u64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM history WHERE session_id = ?")
            .bind(session_id)
            .fetch_one(&self.pool.reader)
            .await
            .map_err(storage_err)?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(storage_err)?;

        Ok(count as u64)
    }
}
