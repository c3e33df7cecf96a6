use async_trait::async_trait;

use crate::contact::{Contact, ContactChanges, ContactId, NewContact};

use super::{Pagination, Result};

/// Repository for contact operations.
///
/// Every method is one unit of work: it runs inside a single database
/// transaction that is committed on success and rolled back on every other
/// exit path.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Inserts a new contact and returns it with its assigned id and
    /// creation timestamp.
    ///
    /// Fails with `RepositoryError::EmailTaken` if another contact already
    /// uses the email; no row is written in that case.
    async fn create_contact(&self, contact: &NewContact) -> Result<Contact>;

    /// Lists contacts in insertion order.
    async fn list_contacts(&self, page: Pagination) -> Result<Vec<Contact>>;

    /// Gets a contact by its id.
    async fn get_contact(&self, id: ContactId) -> Result<Option<Contact>>;

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// Fails with `RepositoryError::NotFound` if the contact does not exist.
    async fn update_contact(&self, id: ContactId, changes: ContactChanges) -> Result<Contact>;

    /// Deletes a contact by its id.
    ///
    /// Fails with `RepositoryError::NotFound` if the contact does not exist.
    async fn delete_contact(&self, id: ContactId) -> Result<()>;

    /// Performs a trivial round trip to check the store is reachable.
    async fn ping(&self) -> Result<()>;
}
