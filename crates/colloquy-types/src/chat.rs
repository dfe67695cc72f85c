//! Session, turn, and message types for Colloquy.
//!
//! A `Session` is a named conversation thread. A `Turn` is one stored
//! user/assistant exchange belonging to a session. The conversation a
//! responder sees is never stored as such -- it is derived by flattening a
//! session's turns in insertion order (see [`flatten_turns`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default display name assigned to freshly created sessions.
///
/// Matches the `DEFAULT 'Session'` column default in the SQLite schema.
pub const DEFAULT_SESSION_NAME: &str = "Session";

/// Who authored a message in a flattened conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// One role-tagged entry in a flattened conversation.
///
/// Serializes as `{"role": "user"|"assistant", "content": "..."}`, which is
/// both the history-endpoint payload and the responder's stdin wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Build an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A named, independently addressable conversation thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "session_id")]
    pub id: i64,
    pub name: String,
}

/// One stored user/assistant exchange belonging to a session.
///
/// `id` is the per-database sequence number assigned at insert time;
/// ordering turns by it ascending reproduces conversation order. Turns are
/// immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub id: i64,
    pub session_id: i64,
    pub user_input: String,
    pub ai_response: String,
}

impl Turn {
    /// Flatten this turn into up to two messages.
    ///
    /// An empty `user_input` or `ai_response` contributes no message for
    /// that side of the exchange.
    pub fn messages(&self) -> impl Iterator<Item = Message> + '_ {
        let user = (!self.user_input.is_empty()).then(|| Message::user(self.user_input.as_str()));
        let assistant = (!self.ai_response.is_empty())
            .then(|| Message::assistant(self.ai_response.as_str()));
        user.into_iter().chain(assistant)
    }
}

/// Flatten a sequence of turns into the derived conversation view.
///
/// Turns must already be in insertion order; each contributes its user
/// message then its assistant message, skipping empty fields.
pub fn flatten_turns(turns: &[Turn]) -> Vec<Message> {
    turns.iter().flat_map(Turn::messages).collect()
}
