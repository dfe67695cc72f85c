//! Responder trait definition.
//!
//! This is the capability seam between the query orchestrator and whatever
//! actually generates assistant text. The shipped implementation spawns an
//! external process (`colloquy-infra`), but anything that can turn a
//! conversation into text -- a network call, an in-process model -- fits
//! behind this trait without touching the orchestrator.

use colloquy_types::chat::Message;
use colloquy_types::error::GatewayError;

/// Trait for assistant-text generation backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in colloquy-infra (e.g., `SubprocessResponder`).
pub trait Responder: Send + Sync {
    /// Human-readable backend name for logs (e.g., "subprocess").
    fn name(&self) -> &str;

    /// Generate assistant output for the given conversation.
    ///
    /// The conversation is the full ordered message sequence, ending with
    /// the current user query. Blocks until the backend completes; there is
    /// no timeout, retry, or streaming at this seam. On failure no partial
    /// output is returned.
    fn generate(
        &self,
        conversation: &[Message],
    ) -> impl std::future::Future<Output = Result<String, GatewayError>> + Send;
}
