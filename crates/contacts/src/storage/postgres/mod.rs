//! PostgreSQL storage backend implementation.
//!
//! Implements [`ContactRepository`](contacts_core::storage::ContactRepository)
//! on top of a `sqlx` connection pool with the driver's default pool
//! settings. Used when `DATABASE_URL` points at a PostgreSQL server.

mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;
