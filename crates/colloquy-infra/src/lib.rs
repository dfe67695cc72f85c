//! Infrastructure layer for Colloquy.
//!
//! Contains implementations of the traits defined in `colloquy-core`:
//! SQLite storage for sessions and turn history, and the subprocess-backed
//! responder gateway.

pub mod responder;
pub mod sqlite;
