//! Pure functions for mapping core errors to HTTP status codes.
//!
//! Following the Functional Core pattern - pure functions with no side
//! effects. The server crate turns these codes into responses.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `EmailTaken` -> 400 (Bad Request)
/// - `ConnectionFailed`, `QueryFailed`, `Serialization` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use contacts_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::contact_not_found(3);
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::EmailTaken { .. } => 400,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
    }
}

/// Returns the client-facing message for a [`RepositoryError`].
///
/// Server-side failures collapse to a generic message so that driver
/// details never reach the response body.
pub fn repository_error_detail(error: &RepositoryError) -> String {
    match error {
        RepositoryError::NotFound { entity_type, .. } => format!("{entity_type} not found"),
        RepositoryError::EmailTaken { .. } => "Email already registered".to_string(),
        RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_) => "Internal server error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::contact_not_found(1);
        assert_eq!(repository_error_to_status_code(&error), 404);
        assert_eq!(repository_error_detail(&error), "Contact not found");
    }

    #[test]
    fn test_email_taken_maps_to_400() {
        let error = RepositoryError::EmailTaken {
            email: "dup@example.com".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 400);
        assert_eq!(repository_error_detail(&error), "Email already registered");
    }

    #[test]
    fn test_storage_failures_map_to_500_without_leaking() {
        let errors = [
            RepositoryError::ConnectionFailed("password authentication failed".to_string()),
            RepositoryError::QueryFailed("syntax error near SELECT".to_string()),
            RepositoryError::Serialization("bad timestamp".to_string()),
        ];

        for error in errors {
            assert_eq!(repository_error_to_status_code(&error), 500);
            assert_eq!(repository_error_detail(&error), "Internal server error");
        }
    }
}
