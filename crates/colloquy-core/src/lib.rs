//! Business logic and repository trait definitions for Colloquy.
//!
//! This crate defines the "ports" (repository and responder traits) that the
//! infrastructure layer implements, and the query orchestration service built
//! on top of them. It depends only on `colloquy-types` -- never on
//! `colloquy-infra` or any database/IO crate.

pub mod chat;
pub mod responder;
pub mod session;
