use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a contact by the storage layer.
pub type ContactId = i64;

/// A persisted contact, as returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Stays `None` until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// Returns the editable fields of this contact as a new contact draft.
    pub fn to_new_contact(&self) -> NewContact {
        NewContact {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// A validated contact that has not been written yet.
///
/// Produced from a [`CreateContactRequest`](super::CreateContactRequest) once
/// validation passes. The storage layer assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
}

impl NewContact {
    /// Builds the stored contact for this draft.
    pub fn into_contact(self, id: ContactId, created_at: DateTime<Utc>) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            notes: self.notes,
            created_at,
            updated_at: None,
        }
    }
}
