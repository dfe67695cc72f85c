//! Conversation storage port and the query orchestration service.

pub mod repository;
pub mod service;
