//! Shared domain types for Colloquy.
//!
//! This crate contains the domain types used across the Colloquy backend:
//! Session, Turn, the flattened Message view, and their error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod error;
