//! PostgreSQL schema definitions and SQL query constants.

/// SQL statement to create the contacts table.
///
/// Kept to a single statement: prepared statements cannot carry several.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id BIGSERIAL PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone TEXT,
    company TEXT,
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ
)
"#;

pub const INSERT_CONTACT: &str = r#"
INSERT INTO contacts (first_name, last_name, email, phone, company, notes, created_at)
VALUES ($1, $2, $3, $4, $5, $6, $7)
RETURNING id, first_name, last_name, email, phone, company, notes, created_at, updated_at
"#;

pub const SELECT_CONTACT_BY_ID: &str = r#"
SELECT id, first_name, last_name, email, phone, company, notes, created_at, updated_at
FROM contacts
WHERE id = $1
"#;

/// Same as [`SELECT_CONTACT_BY_ID`] but locks the row until the
/// transaction ends.
pub const SELECT_CONTACT_BY_ID_FOR_UPDATE: &str = r#"
SELECT id, first_name, last_name, email, phone, company, notes, created_at, updated_at
FROM contacts
WHERE id = $1
FOR UPDATE
"#;

pub const SELECT_CONTACT_ID_BY_EMAIL: &str = r#"
SELECT id
FROM contacts
WHERE email = $1
"#;

pub const SELECT_CONTACTS_PAGE: &str = r#"
SELECT id, first_name, last_name, email, phone, company, notes, created_at, updated_at
FROM contacts
ORDER BY id ASC
LIMIT $1 OFFSET $2
"#;

pub const UPDATE_CONTACT: &str = r#"
UPDATE contacts
SET first_name = $2, last_name = $3, email = $4, phone = $5, company = $6, notes = $7, updated_at = $8
WHERE id = $1
RETURNING id, first_name, last_name, email, phone, company, notes, created_at, updated_at
"#;

pub const DELETE_CONTACT: &str = r#"
DELETE FROM contacts
WHERE id = $1
"#;

pub const PING: &str = "SELECT 1";
