use thiserror::Error;

/// Errors from persistence operations (used by trait definitions in colloquy-core).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors from the external responder process.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to spawn responder '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to feed conversation to responder: {0}")]
    Io(String),

    #[error("responder exited with {status}: {stderr}")]
    ExitStatus { status: String, stderr: String },

    #[error("responder produced non-UTF-8 output")]
    InvalidUtf8,

    #[error("failed to encode conversation: {0}")]
    Encode(String),
}

/// Errors surfaced by a single end-to-end query.
///
/// The variant marks which phase failed: a gateway failure guarantees no
/// turn was persisted; a storage failure after generation means the
/// generated text was lost (accepted lost-response semantics).
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_gateway_exit_status_display() {
        let err = GatewayError::ExitStatus {
            status: "exit status: 1".to_string(),
            stderr: "boom".to_string(),
        };
        assert!(err.to_string().contains("exit status: 1"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_query_error_is_transparent() {
        let err = QueryError::from(StorageError::NotFound);
        assert_eq!(err.to_string(), "entity not found");
        let err = QueryError::from(GatewayError::InvalidUtf8);
        assert_eq!(err.to_string(), "responder produced non-UTF-8 output");
    }
}
