//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! [`ContactRepository`] defined in `contacts_core::storage`. The backend is
//! picked at startup from the resolved [`DatabaseTarget`].
//!
//! # Feature Flags
//!
//! - SQLite is always available, using `rusqlite` and `tokio-rusqlite`
//! - `postgres` (default): PostgreSQL backend using `sqlx`
//!
//! # Examples
//!
//! Build without PostgreSQL support:
//! ```bash
//! cargo build -p contacts --no-default-features
//! ```

use std::sync::Arc;

use contacts_core::storage::ContactRepository;

#[cfg(not(feature = "postgres"))]
use crate::config::ConfigError;
use crate::config::DatabaseTarget;

pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use sqlite::SqliteRepository;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;

/// Entity name reported in storage errors.
const ENTITY: &str = "Contact";

/// What a failing statement was about, used to fill in error details.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Subject<'a> {
    Id(i64),
    Email(&'a str),
    Unknown,
}

impl Subject<'_> {
    fn id(&self) -> String {
        match self {
            Subject::Id(id) => id.to_string(),
            Subject::Email(email) => (*email).to_string(),
            Subject::Unknown => "unknown".to_string(),
        }
    }

    fn email(&self) -> String {
        match self {
            Subject::Email(email) => (*email).to_string(),
            _ => "unknown".to_string(),
        }
    }
}

/// Opens the repository for the configured target.
///
/// Runs schema creation before returning. Connection failures are returned
/// as-is; there are no retries.
pub async fn connect(target: &DatabaseTarget) -> anyhow::Result<Arc<dyn ContactRepository>> {
    tracing::info!(backend = target.backend(), target = ?target, "Connecting to database");

    match target {
        DatabaseTarget::Sqlite { path } => Ok(Arc::new(SqliteRepository::new(path).await?)),
        #[cfg(feature = "postgres")]
        DatabaseTarget::Postgres { url } => Ok(Arc::new(PostgresRepository::connect(url).await?)),
        #[cfg(not(feature = "postgres"))]
        DatabaseTarget::Postgres { .. } => Err(ConfigError::PostgresDisabled.into()),
    }
}
