//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and substring filtering over the `contacts` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every listing is ordered by `name ASC, id ASC`.
//! - Filtering folds case with Unicode lowercasing, not SQLite `LIKE`.
//! - Writes are single statements and persist immediately.
//! - Read paths reject undecodable rows instead of masking them.

use crate::db::DbError;
use crate::model::contact::{Contact, ContactId};
use log::debug;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT id, name, phone FROM contacts";
const CONTACT_ORDER_SQL: &str = "ORDER BY name ASC, id ASC";

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer failure for contact persistence and queries.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable contact store.
///
/// Implementations do not validate `name`/`phone` content; callers do.
pub trait ContactRepository {
    /// Inserts one contact and returns its freshly assigned id.
    fn add(&self, name: &str, phone: &str) -> StorageResult<ContactId>;
    /// Replaces name/phone. Returns `false` when `id` does not exist.
    fn update(&self, id: ContactId, name: &str, phone: &str) -> StorageResult<bool>;
    /// Hard-deletes one contact. Returns `false` when `id` does not exist.
    fn delete(&self, id: ContactId) -> StorageResult<bool>;
    fn get(&self, id: ContactId) -> StorageResult<Option<Contact>>;
    /// Lists every contact sorted by name.
    fn list_all(&self) -> StorageResult<Vec<Contact>>;
    /// Case-insensitive substring match on name or phone, sorted by name.
    fn filter(&self, substring: &str) -> StorageResult<Vec<Contact>>;
}

impl<R: ContactRepository + ?Sized> ContactRepository for &R {
    fn add(&self, name: &str, phone: &str) -> StorageResult<ContactId> {
        (**self).add(name, phone)
    }

    fn update(&self, id: ContactId, name: &str, phone: &str) -> StorageResult<bool> {
        (**self).update(id, name, phone)
    }

    fn delete(&self, id: ContactId) -> StorageResult<bool> {
        (**self).delete(id)
    }

    fn get(&self, id: ContactId) -> StorageResult<Option<Contact>> {
        (**self).get(id)
    }

    fn list_all(&self) -> StorageResult<Vec<Contact>> {
        (**self).list_all()
    }

    fn filter(&self, substring: &str) -> StorageResult<Vec<Contact>> {
        (**self).filter(substring)
    }
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_contacts(&self, sql: &str) -> StorageResult<Vec<Contact>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;

        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }
        Ok(contacts)
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn add(&self, name: &str, phone: &str) -> StorageResult<ContactId> {
        self.conn.execute(
            "INSERT INTO contacts (name, phone) VALUES (?1, ?2);",
            params![name, phone],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("event=contact_add module=repo status=ok contact_id={id}");
        Ok(id)
    }

    fn update(&self, id: ContactId, name: &str, phone: &str) -> StorageResult<bool> {
        let changed = self.conn.execute(
            "UPDATE contacts SET name = ?2, phone = ?3 WHERE id = ?1;",
            params![id, name, phone],
        )?;
        debug!("event=contact_update module=repo status=ok contact_id={id} changed={changed}");
        Ok(changed > 0)
    }

    fn delete(&self, id: ContactId) -> StorageResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1;", params![id])?;
        debug!("event=contact_delete module=repo status=ok contact_id={id} changed={changed}");
        Ok(changed > 0)
    }

    fn get(&self, id: ContactId) -> StorageResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_contact_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> StorageResult<Vec<Contact>> {
        self.query_contacts(&format!("{CONTACT_SELECT_SQL} {CONTACT_ORDER_SQL};"))
    }

    fn filter(&self, substring: &str) -> StorageResult<Vec<Contact>> {
        if substring.trim().is_empty() {
            return self.list_all();
        }

        // SQLite `LIKE`/`lower()` fold ASCII only; match in Rust instead.
        let needle = substring.to_lowercase();
        let mut contacts = self.list_all()?;
        contacts.retain(|contact| matches_needle(contact, &needle));
        debug!(
            "event=contact_filter module=repo status=ok hits={}",
            contacts.len()
        );
        Ok(contacts)
    }
}

fn parse_contact_row(row: &Row<'_>) -> StorageResult<Contact> {
    let id = row
        .get::<_, Option<i64>>("id")?
        .ok_or_else(|| StorageError::InvalidData("null value in contacts.id".to_string()))?;

    Ok(Contact {
        id: Some(id),
        name: row.get("name")?,
        phone: row.get("phone")?,
    })
}

/// `needle` must already be lowercased.
fn matches_needle(contact: &Contact, needle: &str) -> bool {
    contact.name.to_lowercase().contains(needle) || contact.phone.to_lowercase().contains(needle)
}
