//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the HTTP handlers.
//! Services are generic over repository/responder traits, but AppState pins
//! them to the concrete infra implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use colloquy_core::chat::service::ChatService;
use colloquy_core::session::service::SessionService;
use colloquy_infra::responder::SubprocessResponder;
use colloquy_infra::sqlite::history::SqliteHistoryRepository;
use colloquy_infra::sqlite::pool::DatabasePool;
use colloquy_infra::sqlite::session::SqliteSessionRepository;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteHistoryRepository, SubprocessResponder>;

pub type ConcreteSessionService = SessionService<SqliteSessionRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub session_service: Arc<ConcreteSessionService>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    ///
    /// Creates the data directory if needed; the pool runs migrations on
    /// startup. The responder is constructed by the caller so the command
    /// line stays a plain configuration concern.
    pub async fn init(data_dir: &Path, responder: SubprocessResponder) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("colloquy.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let history_repo = SqliteHistoryRepository::new(db_pool.clone());
        let chat_service = ChatService::new(history_repo, responder);

        let session_repo = SqliteSessionRepository::new(db_pool.clone());
        let session_service = SessionService::new(session_repo);

        Ok(Self {
            chat_service: Arc::new(chat_service),
            session_service: Arc::new(session_service),
            data_dir: data_dir.to_path_buf(),
            db_pool,
        })
    }
}
