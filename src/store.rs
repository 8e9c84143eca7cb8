//! SQLite-backed entry store.
//!
//! Insertion order equals scan order: entries are keyed by their 1-based
//! sequence id and scanned in ascending id order. All inserts go through
//! parameter binding; field values never reach SQL text.

use std::fs;
use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::{ConvertError, Result};
use crate::types::Entry;

/// Ordered collection of dictionary entries, keyed by id.
#[derive(Debug)]
pub struct EntryStore {
    conn: Connection,
}

impl EntryStore {
    /// Create an empty store at `path`, replacing any previous one.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Create an empty in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE lex (
                id     INTEGER PRIMARY KEY,
                source TEXT NOT NULL,
                target TEXT NOT NULL,
                part   TEXT,
                ling   TEXT
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Append an entry, keyed by its id.
    ///
    /// The parser assigns ids sequentially, so a key collision indicates
    /// an internal invariant violation and fails with
    /// [`ConvertError::DuplicateKey`].
    pub fn append(&self, entry: &Entry) -> Result<()> {
        let result = self.conn.execute(
            "INSERT INTO lex (id, source, target, part, ling) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![entry.id, entry.source, entry.target, entry.part, entry.ling],
        );
        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(ConvertError::DuplicateKey { id: entry.id })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Scan all entries in ascending id order.
    ///
    /// A single lazy pass: rows are produced one at a time from the
    /// underlying cursor and handed to `visit`. An error from `visit`
    /// aborts the scan.
    pub fn scan_ordered<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(Entry) -> Result<()>,
    {
        let mut stmt = self
            .conn
            .prepare("SELECT id, source, target, part, ling FROM lex ORDER BY id ASC")?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            visit(Entry {
                id: row.get(0)?,
                source: row.get(1)?,
                target: row.get(2)?,
                part: row.get(3)?,
                ling: row.get(4)?,
            })?;
        }
        Ok(())
    }

    /// Number of stored entries.
    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM lex", [], |row| row.get(0))?;
        Ok(count)
    }
}
