use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while validating a contact payload.
///
/// Always produced before any storage access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", summarize(.0))]
pub struct ValidationError(pub Vec<FieldError>);

impl ValidationError {
    /// Creates a validation error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    /// Returns the field-level details.
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }
}

fn summarize(fields: &[FieldError]) -> String {
    let parts: Vec<String> = fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect();
    format!("Validation failed: {}", parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_single_field() {
        let error = ValidationError::field("email", "value is not a valid email address");
        assert_eq!(
            error.to_string(),
            "Validation failed: email: value is not a valid email address"
        );
    }

    #[test]
    fn test_validation_error_display_multiple_fields() {
        let error = ValidationError(vec![
            FieldError::new("first_name", "must not be null"),
            FieldError::new("last_name", "must not be null"),
        ]);
        assert_eq!(
            error.to_string(),
            "Validation failed: first_name: must not be null; last_name: must not be null"
        );
        assert_eq!(error.fields().len(), 2);
    }
}
