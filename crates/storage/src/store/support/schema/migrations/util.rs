#![forbid(unsafe_code)]

use super::super::super::super::StoreError;
use rusqlite::{Connection, params};

pub(super) fn table_exists(conn: &Connection, table: &str) -> Result<bool, StoreError> {
    let found: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |row| row.get(0),
    )?;
    Ok(found > 0)
}

pub(super) fn column_exists(
    conn: &Connection,
    table: &str,
    column: &str,
) -> Result<bool, StoreError> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}

// ALTER TABLE ADD COLUMN is not re-runnable, so the guard lives here instead
// of relying on error-message sniffing.
pub(super) fn add_column_if_missing(
    conn: &Connection,
    table: &str,
    column: &str,
    decl: &str,
) -> Result<(), StoreError> {
    if column_exists(conn, table, column)? {
        return Ok(());
    }
    conn.execute(&format!("ALTER TABLE {table} ADD COLUMN {column} {decl}"), [])?;
    Ok(())
}

pub(super) fn row_count(conn: &Connection, table: &str) -> Result<i64, StoreError> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(count)
}

pub(super) fn check_foreign_keys(conn: &Connection) -> Result<(), StoreError> {
    let mut stmt = conn.prepare("PRAGMA foreign_key_check")?;
    let mut rows = stmt.query([])?;
    let mut first_table: Option<String> = None;
    let mut count = 0i64;
    while let Some(row) = rows.next()? {
        if first_table.is_none() {
            first_table = Some(row.get::<_, String>(0)?);
        }
        count += 1;
    }
    match first_table {
        Some(table) => Err(StoreError::ForeignKeyViolations { table, count }),
        None => Ok(()),
    }
}
