use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Email already registered: {email}")]
    EmailTaken { email: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Shorthand for a missing contact.
    pub fn contact_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::contact_not_found(42);
        assert_eq!(error.to_string(), "Contact not found: 42");
    }

    #[test]
    fn test_repository_error_email_taken_display() {
        let error = RepositoryError::EmailTaken {
            email: "ada@example.com".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Email already registered: ada@example.com"
        );
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: contacts".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: contacts");
    }
}
