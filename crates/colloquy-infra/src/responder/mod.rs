//! Responder gateway implementations.

pub mod subprocess;

pub use subprocess::SubprocessResponder;
