//! SQLite repository implementation.
//!
//! Implements [`ContactRepository`] from `contacts_core::storage` using SQLite.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use contacts_core::contact::{Contact, ContactChanges, ContactId, NewContact};
use contacts_core::storage::{ContactRepository, Pagination, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_contact};
use super::error::map_tokio_rusqlite_error;
use super::schema;
use crate::storage::Subject;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// All statements run on the single background connection owned by
/// `tokio_rusqlite`, so writes are serialized by the driver.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path = %path.display(), "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ContactRepository for SqliteRepository {
    async fn create_contact(&self, contact: &NewContact) -> Result<Contact> {
        let draft = contact.clone();
        let created_at = Utc::now();
        let created_at_str = format_datetime(&created_at);

        let created = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                let taken: Option<i64> = tx
                    .query_row(schema::SELECT_CONTACT_ID_BY_EMAIL, [&draft.email], |row| {
                        row.get(0)
                    })
                    .optional()
                    .map_err(wrap_err)?;
                if taken.is_some() {
                    // Dropping the transaction rolls it back.
                    return Ok(None);
                }

                tx.execute(
                    schema::INSERT_CONTACT,
                    rusqlite::params![
                        draft.first_name,
                        draft.last_name,
                        draft.email,
                        draft.phone,
                        draft.company,
                        draft.notes,
                        created_at_str
                    ],
                )
                .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                tx.commit().map_err(wrap_err)?;

                Ok(Some(draft.into_contact(id, created_at)))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Subject::Email(&contact.email)))?;

        created.ok_or_else(|| RepositoryError::EmailTaken {
            email: contact.email.clone(),
        })
    }

    async fn list_contacts(&self, page: Pagination) -> Result<Vec<Contact>> {
        let limit = page.limit_param();
        let offset = page.offset_param();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CONTACTS_PAGE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([limit, offset], row_to_contact)
                    .map_err(wrap_err)?;

                let mut contacts = Vec::new();
                for row_result in rows {
                    contacts.push(row_result.map_err(wrap_err)?);
                }
                Ok(contacts)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Subject::Unknown))
    }

    async fn get_contact(&self, id: ContactId) -> Result<Option<Contact>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CONTACT_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_contact) {
                    Ok(contact) => Ok(Some(contact)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Subject::Id(id)))
    }

    async fn update_contact(&self, id: ContactId, changes: ContactChanges) -> Result<Contact> {
        let new_email = changes.email.clone();
        let updated_at = Utc::now();

        let updated = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                let current = tx
                    .query_row(schema::SELECT_CONTACT_BY_ID, [id], row_to_contact)
                    .optional()
                    .map_err(wrap_err)?;
                let Some(mut contact) = current else {
                    return Ok(None);
                };

                changes.apply_to(&mut contact);
                contact.updated_at = Some(updated_at);

                tx.execute(
                    schema::UPDATE_CONTACT,
                    rusqlite::params![
                        contact.id,
                        contact.first_name,
                        contact.last_name,
                        contact.email,
                        contact.phone,
                        contact.company,
                        contact.notes,
                        format_datetime(&updated_at)
                    ],
                )
                .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;

                Ok(Some(contact))
            })
            .await
            .map_err(|e| {
                let subject = match &new_email {
                    Some(email) => Subject::Email(email),
                    None => Subject::Id(id),
                };
                map_tokio_rusqlite_error(e, subject)
            })?;

        updated.ok_or_else(|| RepositoryError::contact_not_found(id))
    }

    async fn delete_contact(&self, id: ContactId) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_CONTACT, [id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Subject::Id(id)))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Subject::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_core::contact::{CreateContactRequest, UpdateContactRequest};
    use std::time::Duration;

    async fn setup() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    fn new_contact(n: usize) -> NewContact {
        CreateContactRequest::new(format!("First{n}"), format!("Last{n}"), format!("c{n}@example.com"))
            .validate()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_contact() {
        let repo = setup().await;
        let draft = CreateContactRequest::new("Ada", "Lovelace", "ada@example.com")
            .with_phone("555-0100")
            .with_notes("first programmer")
            .validate()
            .unwrap();

        let created = repo.create_contact(&draft).await.unwrap();
        let fetched = repo.get_contact(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.to_new_contact(), draft);
        assert_eq!(fetched.updated_at, None);
    }

    #[tokio::test]
    async fn test_get_nonexistent_contact() {
        let repo = setup().await;
        assert!(repo.get_contact(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_writing() {
        let repo = setup().await;
        repo.create_contact(&new_contact(1)).await.unwrap();

        let mut duplicate = new_contact(2);
        duplicate.email = "c1@example.com".to_string();
        let result = repo.create_contact(&duplicate).await;

        assert_eq!(
            result,
            Err(RepositoryError::EmailTaken {
                email: "c1@example.com".to_string()
            })
        );
        let all = repo.list_contacts(Pagination::default()).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_list_pagination_in_insertion_order() {
        let repo = setup().await;
        for n in 0..5 {
            repo.create_contact(&new_contact(n)).await.unwrap();
        }

        let first = repo.list_contacts(Pagination::new(0, 2)).await.unwrap();
        let emails: Vec<&str> = first.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, vec!["c0@example.com", "c1@example.com"]);

        let last = repo.list_contacts(Pagination::new(4, 2)).await.unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].email, "c4@example.com");

        let past_end = repo.list_contacts(Pagination::new(10, 2)).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_partial_update() {
        let repo = setup().await;
        let created = repo.create_contact(&new_contact(1)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;

        let changes = UpdateContactRequest::new()
            .with_company("Acme")
            .validate()
            .unwrap();
        let updated = repo.update_contact(created.id, changes).await.unwrap();

        assert_eq!(updated.company.as_deref(), Some("Acme"));
        assert_eq!(updated.first_name, created.first_name);
        assert_eq!(updated.last_name, created.last_name);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.phone, created.phone);
        assert_eq!(updated.notes, created.notes);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.unwrap() > created.created_at);

        let fetched = repo.get_contact(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_nonexistent_contact() {
        let repo = setup().await;
        let result = repo.update_contact(404, ContactChanges::default()).await;
        assert_eq!(result, Err(RepositoryError::contact_not_found(404)));
    }

    #[tokio::test]
    async fn test_update_to_taken_email_hits_unique_constraint() {
        let repo = setup().await;
        repo.create_contact(&new_contact(1)).await.unwrap();
        let second = repo.create_contact(&new_contact(2)).await.unwrap();

        let changes = UpdateContactRequest::new()
            .with_email("c1@example.com")
            .validate()
            .unwrap();
        let result = repo.update_contact(second.id, changes).await;

        assert_eq!(
            result,
            Err(RepositoryError::EmailTaken {
                email: "c1@example.com".to_string()
            })
        );
        let unchanged = repo.get_contact(second.id).await.unwrap().unwrap();
        assert_eq!(unchanged.email, "c2@example.com");
        assert_eq!(unchanged.updated_at, None);
    }

    #[tokio::test]
    async fn test_delete_contact_twice() {
        let repo = setup().await;
        let created = repo.create_contact(&new_contact(1)).await.unwrap();

        repo.delete_contact(created.id).await.unwrap();
        assert!(repo.get_contact(created.id).await.unwrap().is_none());

        let result = repo.delete_contact(created.id).await;
        assert_eq!(result, Err(RepositoryError::contact_not_found(created.id)));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = setup().await;
        let first = repo.create_contact(&new_contact(1)).await.unwrap();
        let second = repo.create_contact(&new_contact(2)).await.unwrap();
        repo.delete_contact(second.id).await.unwrap();

        let third = repo.create_contact(&new_contact(3)).await.unwrap();

        assert!(third.id > second.id);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = setup().await;
        repo.ping().await.unwrap();
    }
}
