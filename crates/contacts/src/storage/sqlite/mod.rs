//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of
//! [`ContactRepository`](contacts_core::storage::ContactRepository) using
//! `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping. It is the local file-backed store used when no external
//! database is configured.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
