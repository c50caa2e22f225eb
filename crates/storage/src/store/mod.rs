#![forbid(unsafe_code)]

mod activities;
mod error;
mod gardens;
mod harvests;
mod journal;
mod plant_types;
mod plants;
mod requests;
mod support;
mod types;

pub use error::StoreError;
pub use requests::*;
pub use support::{MigrationEntry, MigrationReport, TableCount};
pub use types::*;

use rusqlite::{Connection, ErrorCode, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (creating if needed) the database file and brings its schema to
    /// the current version. Every open walks the migration chain, so callers
    /// never observe a legacy table layout.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with_report(db_path).map(|(store, _)| store)
    }

    /// Same as [`open`](Self::open), additionally reporting which migrations
    /// this call applied and the post-migration row counts.
    pub fn open_with_report(
        db_path: impl AsRef<Path>,
    ) -> Result<(Self, MigrationReport), StoreError> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut conn = Connection::open(&db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
"#,
        )?;

        let applied = support::migrate(&mut conn)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let tables = support::table_counts(&conn)?;

        Ok((Self { conn, db_path }, MigrationReport { applied, tables }))
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Row counts for every table of the current schema.
    pub fn table_counts(&self) -> Result<Vec<TableCount>, StoreError> {
        support::table_counts(&self.conn)
    }
}

/// Lists migrations the database at `db_path` has not applied yet, without
/// applying them. Strictly read-only: a database that does not exist yet is
/// reported as needing the full chain, and an existing one is opened without
/// write access, so checking never creates or mutates the file.
pub fn pending_migrations(db_path: impl AsRef<Path>) -> Result<Vec<MigrationEntry>, StoreError> {
    let db_path = db_path.as_ref();
    if !db_path.exists() {
        return Ok(support::full_chain());
    }
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    conn.busy_timeout(Duration::from_secs(5))?;
    support::pending(&conn)
}

fn require_text<'a>(value: &'a str, message: &'static str) -> Result<&'a str, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput(message));
    }
    Ok(trimmed)
}

// Writes against a missing parent surface as UnknownId rather than a raw
// constraint failure.
fn map_fk_violation(err: rusqlite::Error) -> StoreError {
    if let rusqlite::Error::SqliteFailure(code, _) = &err {
        if code.code == ErrorCode::ConstraintViolation
            && code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
        {
            return StoreError::UnknownId;
        }
    }
    StoreError::Sql(err)
}
