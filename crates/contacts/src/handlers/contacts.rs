//! Contact CRUD handlers.
//!
//! Each handler validates its input, then runs exactly one repository call.
//! Extractor rejections are reported as field-level validation errors so
//! every 400 carries the same body shape.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use contacts_core::contact::{
    Contact, ContactId, CreateContactRequest, UpdateContactRequest, ValidationError,
};
use contacts_core::storage::{Pagination, RepositoryError};

use crate::{handlers::AppError, state::AppState};

/// Turns an extractor rejection into a validation error on `field`.
fn rejected(field: &str, message: String) -> AppError {
    AppError::from(ValidationError::field(field, message))
}

fn contact_id(path: Result<Path<ContactId>, PathRejection>) -> Result<ContactId, AppError> {
    path.map(|Path(id)| id)
        .map_err(|e| rejected("id", e.body_text()))
}

/// Create a new contact (POST /contacts/).
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<CreateContactRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| rejected("body", e.body_text()))?;
    let new_contact = payload.validate()?;

    let contact = state.contacts.create_contact(&new_contact).await?;

    tracing::info!(contact_id = %contact.id, email = %contact.email, "Created contact");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// List contacts in insertion order (GET /contacts/?skip=&limit=).
pub async fn list_contacts(
    State(state): State<AppState>,
    page: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, AppError> {
    let Query(page) = page.map_err(|e| rejected("query", e.body_text()))?;

    let contacts = state.contacts.list_contacts(page).await?;

    tracing::debug!(
        skip = page.skip,
        limit = page.limit,
        count = contacts.len(),
        "Listed contacts"
    );
    Ok(Json(contacts))
}

/// Get a contact by ID (GET /contacts/{id}).
pub async fn get_contact(
    State(state): State<AppState>,
    path: Result<Path<ContactId>, PathRejection>,
) -> Result<Json<Contact>, AppError> {
    let id = contact_id(path)?;

    let contact = state
        .contacts
        .get_contact(id)
        .await?
        .ok_or_else(|| RepositoryError::contact_not_found(id))?;

    Ok(Json(contact))
}

/// Apply a partial update to a contact (PUT /contacts/{id}).
pub async fn update_contact(
    State(state): State<AppState>,
    path: Result<Path<ContactId>, PathRejection>,
    payload: Result<Json<UpdateContactRequest>, JsonRejection>,
) -> Result<Json<Contact>, AppError> {
    let id = contact_id(path)?;
    let Json(payload) = payload.map_err(|e| rejected("body", e.body_text()))?;
    let changes = payload.validate()?;

    if changes.is_empty() {
        tracing::debug!(contact_id = %id, "Update carries no field changes");
    }

    let contact = state.contacts.update_contact(id, changes).await?;

    tracing::info!(contact_id = %id, "Updated contact");
    Ok(Json(contact))
}

/// Delete a contact (DELETE /contacts/{id}).
pub async fn delete_contact(
    State(state): State<AppState>,
    path: Result<Path<ContactId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = contact_id(path)?;

    state.contacts.delete_contact(id).await?;

    tracing::info!(contact_id = %id, "Deleted contact");
    Ok(StatusCode::NO_CONTENT)
}
