//! Document repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide raw get/put/delete of serialized document bodies by key.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `put` replaces the full body for a key; there are no partial writes.
//! - The repository never inspects or interprets the body it stores.

use crate::db::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Raw key-value storage for serialized documents.
///
/// This is the durable-medium seam: failures surfacing from an
/// implementation are reported to callers as storage unavailability.
pub trait DocumentRepository {
    fn get(&self, key: &str) -> DbResult<Option<String>>;
    fn put(&self, key: &str, body: &str) -> DbResult<()>;
    fn delete(&self, key: &str) -> DbResult<()>;
}

/// SQLite-backed document repository over the `documents` table.
pub struct SqliteDocumentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DocumentRepository for SqliteDocumentRepository<'_> {
    fn get(&self, key: &str) -> DbResult<Option<String>> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM documents WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(body)
    }

    fn put(&self, key: &str, body: &str) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO documents (key, body, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![key, body],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> DbResult<()> {
        self.conn
            .execute("DELETE FROM documents WHERE key = ?1;", [key])?;
        Ok(())
    }
}
