//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use contacts_core::contact::{Contact, ContactChanges, ContactId, NewContact};
use contacts_core::storage::{ContactRepository, Pagination, RepositoryError, Result};

use super::error::map_sqlx_error;
use super::schema;
use crate::storage::Subject;

/// Column tuple shared by every query returning a full contact row.
type ContactRow = (
    i64,
    String,
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    DateTime<Utc>,
    Option<DateTime<Utc>>,
);

fn row_to_contact(row: ContactRow) -> Contact {
    let (id, first_name, last_name, email, phone, company, notes, created_at, updated_at) = row;
    Contact {
        id,
        first_name,
        last_name,
        email,
        phone,
        company,
        notes,
        created_at,
        updated_at,
    }
}

/// PostgreSQL-based repository implementation.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Connects to the server and creates the schema if needed.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPool::connect(url)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let repo = Self { pool };
        repo.init_schema().await?;

        tracing::debug!("Connected to PostgreSQL");

        Ok(repo)
    }

    /// Initialize the database schema.
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(schema::CREATE_TABLES)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ContactRepository for PostgresRepository {
    async fn create_contact(&self, contact: &NewContact) -> Result<Contact> {
        let subject = Subject::Email(&contact.email);
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, subject))?;

        let taken: Option<i64> = sqlx::query_scalar(schema::SELECT_CONTACT_ID_BY_EMAIL)
            .bind(&contact.email)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, subject))?;
        if taken.is_some() {
            // Dropping the transaction rolls it back.
            return Err(RepositoryError::EmailTaken {
                email: contact.email.clone(),
            });
        }

        let row: ContactRow = sqlx::query_as(schema::INSERT_CONTACT)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.company)
            .bind(&contact.notes)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, subject))?;

        tx.commit().await.map_err(|e| map_sqlx_error(e, subject))?;

        Ok(row_to_contact(row))
    }

    async fn list_contacts(&self, page: Pagination) -> Result<Vec<Contact>> {
        let rows: Vec<ContactRow> = sqlx::query_as(schema::SELECT_CONTACTS_PAGE)
            .bind(page.limit_param())
            .bind(page.offset_param())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, Subject::Unknown))?;

        Ok(rows.into_iter().map(row_to_contact).collect())
    }

    async fn get_contact(&self, id: ContactId) -> Result<Option<Contact>> {
        let row: Option<ContactRow> = sqlx::query_as(schema::SELECT_CONTACT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, Subject::Id(id)))?;

        Ok(row.map(row_to_contact))
    }

    async fn update_contact(&self, id: ContactId, changes: ContactChanges) -> Result<Contact> {
        let new_email = changes.email.clone();
        let subject = match &new_email {
            Some(email) => Subject::Email(email),
            None => Subject::Id(id),
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, subject))?;

        let current: Option<ContactRow> = sqlx::query_as(schema::SELECT_CONTACT_BY_ID_FOR_UPDATE)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, subject))?;
        let Some(current) = current else {
            return Err(RepositoryError::contact_not_found(id));
        };

        let mut contact = row_to_contact(current);
        changes.apply_to(&mut contact);

        let row: ContactRow = sqlx::query_as(schema::UPDATE_CONTACT)
            .bind(contact.id)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.company)
            .bind(&contact.notes)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, subject))?;

        tx.commit().await.map_err(|e| map_sqlx_error(e, subject))?;

        Ok(row_to_contact(row))
    }

    async fn delete_contact(&self, id: ContactId) -> Result<()> {
        let result = sqlx::query(schema::DELETE_CONTACT)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, Subject::Id(id)))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::contact_not_found(id));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query(schema::PING)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, Subject::Unknown))?;

        Ok(())
    }
}
