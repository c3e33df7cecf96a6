//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone TEXT,
    company TEXT,
    notes TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT
);
"#;

pub const INSERT_CONTACT: &str = r#"
INSERT INTO contacts (first_name, last_name, email, phone, company, notes, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_CONTACT_BY_ID: &str = r#"
SELECT id, first_name, last_name, email, phone, company, notes, created_at, updated_at
FROM contacts
WHERE id = ?1
"#;

pub const SELECT_CONTACT_ID_BY_EMAIL: &str = r#"
SELECT id
FROM contacts
WHERE email = ?1
"#;

pub const SELECT_CONTACTS_PAGE: &str = r#"
SELECT id, first_name, last_name, email, phone, company, notes, created_at, updated_at
FROM contacts
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const UPDATE_CONTACT: &str = r#"
UPDATE contacts
SET first_name = ?2, last_name = ?3, email = ?4, phone = ?5, company = ?6, notes = ?7, updated_at = ?8
WHERE id = ?1
"#;

pub const DELETE_CONTACT: &str = r#"
DELETE FROM contacts
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS contacts"));
        assert!(CREATE_TABLES.contains("email TEXT NOT NULL UNIQUE"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_CONTACT.contains("INSERT"));
        assert!(SELECT_CONTACT_BY_ID.contains("WHERE id = ?1"));
        assert!(SELECT_CONTACT_ID_BY_EMAIL.contains("email = ?1"));
        assert!(SELECT_CONTACTS_PAGE.contains("ORDER BY id ASC"));
        assert!(SELECT_CONTACTS_PAGE.contains("LIMIT ?1 OFFSET ?2"));
        assert!(UPDATE_CONTACT.contains("updated_at = ?8"));
        assert!(DELETE_CONTACT.contains("DELETE"));
    }
}
