//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use contacts_core::contact::Contact;

/// Convert a SQLite row to a Contact.
///
/// Expected columns: id, first_name, last_name, email, phone, company, notes, created_at, updated_at
pub fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    let created_at: String = row.get(7)?;
    let updated_at: Option<String> = row.get(8)?;

    Ok(Contact {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        company: row.get(5)?,
        notes: row.get(6)?,
        created_at: parse_datetime(7, &created_at)?,
        updated_at: updated_at
            .map(|s| parse_datetime(8, &s))
            .transpose()?,
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
