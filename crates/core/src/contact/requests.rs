//! API request types for contact operations.
//!
//! These are the creation and update wire shapes. Following the Functional
//! Core pattern, they are pure data types with no I/O; `validate` turns them
//! into values the storage layer accepts.

use serde::{Deserialize, Serialize};

use super::error::{FieldError, ValidationError};
use super::types::{Contact, NewContact};
use super::validation::validate_email;
use crate::serde::deserialize_present;

/// Request payload for creating a new contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateContactRequest {
    /// Create a new request with the required fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            company: None,
            notes: None,
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the company.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Validate the payload and convert it into a [`NewContact`].
    ///
    /// Presence of the required fields is enforced when deserializing; any
    /// string, including an empty one, is accepted for the names.
    pub fn validate(self) -> Result<NewContact, ValidationError> {
        validate_email(&self.email).map_err(|e| ValidationError(vec![e]))?;

        Ok(NewContact {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            notes: self.notes,
        })
    }
}

/// Request payload for updating a contact.
///
/// Every key is optional. A key left out of the JSON body is `None`; a key
/// sent as `null` is `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateContactRequest {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub company: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub notes: Option<Option<String>>,
}

impl UpdateContactRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first name.
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(Some(first_name.into()));
        self
    }

    /// Set the last name.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(Some(last_name.into()));
        self
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(Some(email.into()));
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(Some(phone.into()));
        self
    }

    /// Set the company.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(Some(company.into()));
        self
    }

    /// Set the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(Some(notes.into()));
        self
    }

    /// Validate the supplied keys and convert them into [`ContactChanges`].
    ///
    /// Required attributes cannot be cleared: sending `null` for
    /// `first_name`, `last_name` or `email` is a validation error.
    pub fn validate(self) -> Result<ContactChanges, ValidationError> {
        let mut errors = Vec::new();

        let first_name = required_change("first_name", self.first_name, &mut errors);
        let last_name = required_change("last_name", self.last_name, &mut errors);
        let email = required_change("email", self.email, &mut errors);

        if let Some(email) = &email {
            if let Err(e) = validate_email(email) {
                errors.push(e);
            }
        }

        if !errors.is_empty() {
            return Err(ValidationError(errors));
        }

        Ok(ContactChanges {
            first_name,
            last_name,
            email,
            phone: self.phone,
            company: self.company,
            notes: self.notes,
        })
    }
}

fn required_change(
    field: &str,
    value: Option<Option<String>>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        None => None,
        Some(None) => {
            errors.push(FieldError::new(field, "must not be null"));
            None
        }
        Some(Some(value)) => Some(value),
    }
}

/// A validated partial update.
///
/// Only `Some` fields are applied; for the optional attributes `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub company: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl ContactChanges {
    /// Returns true if no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.notes.is_none()
    }

    /// Apply the supplied fields to an existing contact.
    ///
    /// Does not touch `updated_at`; the storage layer stamps it.
    pub fn apply_to(self, contact: &mut Contact) {
        if let Some(first_name) = self.first_name {
            contact.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            contact.last_name = last_name;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
        if let Some(phone) = self.phone {
            contact.phone = phone;
        }
        if let Some(company) = self.company {
            contact.company = company;
        }
        if let Some(notes) = self.notes {
            contact.notes = notes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stored_contact() -> Contact {
        CreateContactRequest::new("Grace", "Hopper", "grace@navy.mil")
            .with_phone("555-0100")
            .with_notes("COBOL")
            .validate()
            .unwrap()
            .into_contact(1, Utc::now())
    }

    #[test]
    fn test_create_request_optional_fields_default_to_none() {
        let json = r#"{"first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com"}"#;
        let request: CreateContactRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request, CreateContactRequest::new("Ada", "Lovelace", "ada@example.com"));
    }

    #[test]
    fn test_create_request_missing_required_field_fails_to_parse() {
        let json = r#"{"first_name": "Ada", "email": "ada@example.com"}"#;
        let result: Result<CreateContactRequest, _> = serde_json::from_str(json);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("last_name"));
    }

    #[test]
    fn test_create_request_validate_success() {
        let contact = CreateContactRequest::new("Ada", "Lovelace", "ada@example.com")
            .with_company("Analytical Engines")
            .validate()
            .unwrap();

        assert_eq!(contact.first_name, "Ada");
        assert_eq!(contact.company.as_deref(), Some("Analytical Engines"));
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_create_request_validate_rejects_invalid_email() {
        let err = CreateContactRequest::new("Ada", "Lovelace", "not-an-email")
            .validate()
            .unwrap_err();

        let fields: Vec<&str> = err.fields().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["email"]);
    }

    #[test]
    fn test_create_request_accepts_empty_names() {
        let contact = CreateContactRequest::new("", " ", "ada@example.com")
            .validate()
            .unwrap();

        assert_eq!(contact.first_name, "");
        assert_eq!(contact.last_name, " ");
    }

    #[test]
    fn test_update_request_accepts_empty_name() {
        let changes = UpdateContactRequest::new()
            .with_first_name("")
            .validate()
            .unwrap();

        assert_eq!(changes.first_name.as_deref(), Some(""));
    }

    #[test]
    fn test_update_request_distinguishes_missing_and_null() {
        let json = r#"{"company": "Acme", "phone": null}"#;
        let request: UpdateContactRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.company, Some(Some("Acme".to_string())));
        assert_eq!(request.phone, Some(None));
        assert_eq!(request.notes, None);
        assert_eq!(request.first_name, None);
    }

    #[test]
    fn test_update_request_rejects_null_required_field() {
        let request: UpdateContactRequest = serde_json::from_str(r#"{"email": null}"#).unwrap();
        let err = request.validate().unwrap_err();

        assert_eq!(err.fields(), &[FieldError::new("email", "must not be null")]);
    }

    #[test]
    fn test_update_request_rejects_invalid_email() {
        let err = UpdateContactRequest::new()
            .with_email("grace at navy")
            .validate()
            .unwrap_err();

        assert_eq!(err.fields()[0].field, "email");
    }

    #[test]
    fn test_empty_update_is_valid_and_empty() {
        let changes = UpdateContactRequest::new().validate().unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut contact = stored_contact();
        let before = contact.clone();

        UpdateContactRequest::new()
            .with_company("Acme")
            .validate()
            .unwrap()
            .apply_to(&mut contact);

        assert_eq!(contact.company.as_deref(), Some("Acme"));
        assert_eq!(contact.first_name, before.first_name);
        assert_eq!(contact.last_name, before.last_name);
        assert_eq!(contact.email, before.email);
        assert_eq!(contact.phone, before.phone);
        assert_eq!(contact.notes, before.notes);
        assert_eq!(contact.updated_at, None);
    }

    #[test]
    fn test_apply_null_clears_optional_field() {
        let mut contact = stored_contact();
        let request: UpdateContactRequest =
            serde_json::from_str(r#"{"phone": null, "last_name": "Murray Hopper"}"#).unwrap();

        request.validate().unwrap().apply_to(&mut contact);

        assert_eq!(contact.phone, None);
        assert_eq!(contact.last_name, "Murray Hopper");
        assert_eq!(contact.notes.as_deref(), Some("COBOL"));
    }
}
