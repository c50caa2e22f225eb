#![forbid(unsafe_code)]

use super::super::super::super::StoreError;
use super::super::super::time::current_year;
use super::super::sql;
use super::util;
use gl_core::ids::GardenId;
use rusqlite::{Transaction, params};

// v2: introduce gardens as the top-level scoping entity. Runs as one linear
// procedure inside the migration's transaction: ensure the default garden,
// widen the two scoped tables, backfill pre-existing rows, rebuild every
// dependent table with the tightened constraint set, verify nothing was lost.
pub(super) fn apply(tx: &Transaction<'_>) -> Result<(), StoreError> {
    let default_garden = ensure_default_garden(tx)?;
    let before = dependent_counts(tx)?;
    add_scoping_columns(tx)?;
    backfill(tx, default_garden)?;
    rebuild(tx)?;
    verify(tx, default_garden, &before)
}

const DEFAULT_GARDEN_ROWID: i64 = 1;

const SCOPED_TABLES: [&str; 2] = ["plant_types", "garden_activities"];

struct RebuildTable {
    name: &'static str,
    create_sql: fn(&str) -> String,
    columns: &'static str,
}

// Dependency order: parents before children, so no replacement table is ever
// created with a foreign key into a parent that still has the old shape.
const REBUILD_ORDER: [RebuildTable; 5] = [
    RebuildTable {
        name: "plant_types",
        create_sql: sql::plant_types::create_sql,
        columns: sql::plant_types::COLUMNS,
    },
    RebuildTable {
        name: "garden_activities",
        create_sql: sql::garden_activities::create_sql,
        columns: sql::garden_activities::COLUMNS,
    },
    RebuildTable {
        name: "harvests",
        create_sql: sql::harvests::create_sql,
        columns: sql::harvests::COLUMNS,
    },
    RebuildTable {
        name: "plants",
        create_sql: sql::plants::create_sql,
        columns: sql::plants::COLUMNS,
    },
    RebuildTable {
        name: "plant_journals",
        create_sql: sql::plant_journals::create_sql,
        columns: sql::plant_journals::COLUMNS,
    },
];

// Insert-if-absent: an existing row 1 is never overwritten. The resolved id
// is threaded through the later steps instead of being re-spelled as a
// literal downstream.
fn ensure_default_garden(tx: &Transaction<'_>) -> Result<GardenId, StoreError> {
    tx.execute_batch(sql::gardens::SQL)?;
    tx.execute(
        "INSERT OR IGNORE INTO gardens(id, name, description, year) \
         VALUES (?1, 'My Garden', 'Default garden', ?2)",
        params![DEFAULT_GARDEN_ROWID, current_year()],
    )?;
    let id: i64 = tx.query_row(
        "SELECT id FROM gardens WHERE id = ?1",
        params![DEFAULT_GARDEN_ROWID],
        |row| row.get(0),
    )?;
    GardenId::try_new(id).map_err(|_| StoreError::InvalidInput("default garden rowid"))
}

fn dependent_counts(tx: &Transaction<'_>) -> Result<Vec<(&'static str, i64)>, StoreError> {
    let mut out = Vec::with_capacity(REBUILD_ORDER.len());
    for table in &REBUILD_ORDER {
        out.push((table.name, util::row_count(tx, table.name)?));
    }
    Ok(out)
}

fn add_scoping_columns(tx: &Transaction<'_>) -> Result<(), StoreError> {
    for table in SCOPED_TABLES {
        util::add_column_if_missing(tx, table, "garden_id", "INTEGER REFERENCES gardens (id)")?;
    }
    Ok(())
}

fn backfill(tx: &Transaction<'_>, default_garden: GardenId) -> Result<(), StoreError> {
    for table in SCOPED_TABLES {
        tx.execute(
            &format!("UPDATE {table} SET garden_id = ?1 WHERE garden_id IS NULL"),
            params![default_garden.get()],
        )?;
    }
    Ok(())
}

// Copy-and-rename per table: SQLite cannot tighten constraints in place.
// Rowids are preserved by copying the id column explicitly.
fn rebuild(tx: &Transaction<'_>) -> Result<(), StoreError> {
    for table in &REBUILD_ORDER {
        let scratch = format!("{}_new", table.name);
        tx.execute_batch(&(table.create_sql)(&scratch))?;
        tx.execute(
            &format!(
                "INSERT INTO {scratch} ({columns}) SELECT {columns} FROM {name}",
                columns = table.columns,
                name = table.name,
            ),
            [],
        )?;
        tx.execute(&format!("DROP TABLE {}", table.name), [])?;
        tx.execute(&format!("ALTER TABLE {scratch} RENAME TO {}", table.name), [])?;
    }
    Ok(())
}

// Read-only sanity pass. Any mismatch aborts the transaction: a rebuild is a
// schema tightening, never a data transformation.
fn verify(
    tx: &Transaction<'_>,
    default_garden: GardenId,
    before: &[(&'static str, i64)],
) -> Result<(), StoreError> {
    let default_rows: i64 = tx.query_row(
        "SELECT COUNT(*) FROM gardens WHERE id = ?1",
        params![default_garden.get()],
        |row| row.get(0),
    )?;
    if default_rows != 1 {
        return Err(StoreError::MigrationIncomplete {
            table: "gardens",
            expected: 1,
            actual: default_rows,
        });
    }

    for (table, expected) in before.iter().copied() {
        let actual = util::row_count(tx, table)?;
        if actual != expected {
            return Err(StoreError::MigrationIncomplete {
                table,
                expected,
                actual,
            });
        }
    }

    for table in SCOPED_TABLES {
        let total = util::row_count(tx, table)?;
        let scoped: i64 = tx.query_row(
            &format!("SELECT COUNT(*) FROM {table} WHERE garden_id IS NOT NULL"),
            [],
            |row| row.get(0),
        )?;
        if scoped != total {
            return Err(StoreError::MigrationIncomplete {
                table,
                expected: total,
                actual: scoped,
            });
        }
    }
    Ok(())
}
