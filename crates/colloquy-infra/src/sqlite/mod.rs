//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools.

pub mod history;
pub mod pool;
pub mod session;

use colloquy_types::error::StorageError;

/// Map a sqlx error to the domain storage error.
///
/// Faults reaching or keeping the connection (closed/exhausted pool, I/O,
/// TLS) are `Connection`; everything else is a `Query` fault carrying the
/// driver message.
pub(crate) fn storage_err(e: sqlx::Error) -> StorageError {
    match e {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Connection,
        other => StorageError::Query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_faults_map_to_connection() {
        assert!(matches!(
            storage_err(sqlx::Error::PoolClosed),
            StorageError::Connection
        ));
        assert!(matches!(
            storage_err(sqlx::Error::PoolTimedOut),
            StorageError::Connection
        ));
    }

    #[test]
    fn test_other_faults_map_to_query() {
        assert!(matches!(
            storage_err(sqlx::Error::RowNotFound),
            StorageError::Query(_)
        ));
    }
}
