//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `contacts_core::storage`.

use contacts_core::storage::RepositoryError;

use crate::storage::{Subject, ENTITY};

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - unique violation (`23505`) → `RepositoryError::EmailTaken` (email is the only unique column)
/// - `RowNotFound` → `RepositoryError::NotFound`
/// - pool, I/O, TLS and configuration errors → `RepositoryError::ConnectionFailed`
/// - decode errors → `RepositoryError::Serialization`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error, subject: Subject<'_>) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::EmailTaken {
                email: subject.email(),
            }
        }

        sqlx::Error::RowNotFound => RepositoryError::NotFound {
            entity_type: ENTITY,
            id: subject.id(),
        },

        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_) => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::Serialization(err.to_string()),

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
