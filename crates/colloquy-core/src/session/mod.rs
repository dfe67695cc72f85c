//! Session directory port and its thin service.

pub mod repository;
pub mod service;
