//! Query orchestration: read history, generate, persist, return.
//!
//! `ChatService` executes one user query end-to-end against a session. The
//! sequencing here carries the replay-safety guarantees of the whole
//! backend: a turn is persisted only after the responder has succeeded, so
//! stored history never contains an exchange whose assistant side was never
//! produced.

use colloquy_types::chat::Message;
use colloquy_types::error::QueryError;
use tracing::{debug, error, info};

use crate::chat::repository::HistoryRepository;
use crate::responder::Responder;

/// Orchestrates the read-generate-write pipeline for user queries.
///
/// Generic over `HistoryRepository` and `Responder` to maintain clean
/// architecture (colloquy-core never depends on colloquy-infra). Holds its
/// collaborators explicitly; there is no ambient global storage handle.
pub struct ChatService<H: HistoryRepository, R: Responder> {
    history_repo: H,
    responder: R,
}

impl<H: HistoryRepository, R: Responder> ChatService<H, R> {
    /// Create a new chat service with the given repository and responder.
    pub fn new(history_repo: H, responder: R) -> Self {
        Self {
            history_repo,
            responder,
        }
    }

    /// Access the history repository.
    pub fn history_repo(&self) -> &H {
        &self.history_repo
    }

    /// Execute one user query against a session.
    ///
    /// Reads the session's conversation (an unknown session reads as empty
    /// history, by design), appends the query as a user message, invokes the
    /// responder with the augmented conversation, and on success persists
    /// the exchange as a new turn. The responder's raw output is returned to
    /// the caller unmodified.
    ///
    /// An empty `user_query` is passed through, not rejected.
    ///
    /// Failure ordering:
    /// - read fault: aborts before the responder is invoked;
    /// - responder fault: nothing is persisted;
    /// - write fault: the generated text is lost to the caller even though
    ///   generation succeeded. Not retried or rolled back.
    ///
    /// The three steps are individually durable but not atomic as a unit;
    /// concurrent queries on one session may interleave, and turn order is
    /// whatever the store assigns at write time.
    pub async fn handle_query(
        &self,
        session_id: i64,
        user_query: &str,
    ) -> Result<String, QueryError> {
        let mut conversation = self.history_repo.read_conversation(session_id).await?;
        conversation.push(Message::user(user_query));

        debug!(
            session_id,
            messages = conversation.len(),
            responder = self.responder.name(),
            "dispatching conversation to responder"
        );

        let output = self
            .responder
            .generate(&conversation)
            .await
            .inspect_err(|err| {
                error!(session_id, %err, "responder failed, no turn persisted");
            })?;

        self.history_repo
            .append_turn(session_id, user_query, &output)
            .await?;

        info!(
            session_id,
            query_len = user_query.len(),
            response_len = output.len(),
            "query completed"
        );

        Ok(output)
    }

    /// The flattened conversation for a session (read-only passthrough).
    pub async fn session_history(&self, session_id: i64) -> Result<Vec<Message>, QueryError> {
        Ok(self.history_repo.read_conversation(session_id).await?)
    }
}
