#![forbid(unsafe_code)]

mod garden_scoping;
mod initial;
mod util;

use super::super::super::StoreError;
use super::super::time::now_ms;
use rusqlite::{Connection, Transaction, params};

/// One step of the forward-only migration chain, identified by its version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MigrationEntry {
    pub version: i64,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableCount {
    pub table: &'static str,
    pub rows: i64,
}

/// What one open/apply pass did: migrations applied during this call (empty
/// for an up-to-date database) and the post-migration row counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationReport {
    pub applied: Vec<MigrationEntry>,
    pub tables: Vec<TableCount>,
}

struct Migration {
    version: i64,
    name: &'static str,
    apply: fn(&Transaction<'_>) -> Result<(), StoreError>,
}

const MIGRATIONS: [Migration; 2] = [
    Migration {
        version: 1,
        name: "initial_tables",
        apply: initial::apply,
    },
    Migration {
        version: 2,
        name: "garden_scoping",
        apply: garden_scoping::apply,
    },
];

const TABLES: [&str; 6] = [
    "gardens",
    "plant_types",
    "garden_activities",
    "harvests",
    "plants",
    "plant_journals",
];

const LEGACY_TABLES: [&str; 5] = [
    "plant_types",
    "garden_activities",
    "harvests",
    "plants",
    "plant_journals",
];

/// Brings the database to the current schema version. Each pending migration
/// runs in its own transaction together with its history row, so a failure
/// leaves the database exactly at the last fully-applied version.
pub(in crate::store) fn migrate(conn: &mut Connection) -> Result<Vec<MigrationEntry>, StoreError> {
    prepare_history(conn)?;
    if list_pending(conn)?.is_empty() {
        return Ok(Vec::new());
    }

    // Rebuild-by-rename holds interim states that valid foreign keys would
    // reject; enforcement is restored after the pass and every migration runs
    // a foreign_key_check before committing.
    conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
    let applied = apply_pending(conn);
    let restore = conn.execute_batch("PRAGMA foreign_keys = ON;");
    let applied = applied?;
    restore?;
    Ok(applied)
}

/// Lists unapplied migrations without applying them. Read-only: databases
/// that predate the framework are assessed from their live schema instead of
/// being stamped.
pub(in crate::store) fn pending(conn: &Connection) -> Result<Vec<MigrationEntry>, StoreError> {
    if util::table_exists(conn, "schema_migrations")? {
        let recorded: i64 =
            conn.query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))?;
        if recorded > 0 {
            return list_pending(conn);
        }
    }
    let baseline = baseline_versions(conn)?;
    Ok(MIGRATIONS
        .iter()
        .filter(|migration| !baseline.contains(&migration.version))
        .map(|migration| MigrationEntry {
            version: migration.version,
            name: migration.name,
        })
        .collect())
}

/// The full migration chain, as a fresh database would replay it.
pub(in crate::store) fn full_chain() -> Vec<MigrationEntry> {
    MIGRATIONS
        .iter()
        .map(|migration| MigrationEntry {
            version: migration.version,
            name: migration.name,
        })
        .collect()
}

pub(in crate::store) fn table_counts(conn: &Connection) -> Result<Vec<TableCount>, StoreError> {
    let mut out = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        out.push(TableCount {
            table,
            rows: util::row_count(conn, table)?,
        });
    }
    Ok(out)
}

fn apply_pending(conn: &mut Connection) -> Result<Vec<MigrationEntry>, StoreError> {
    let mut applied = Vec::new();
    for migration in &MIGRATIONS {
        if is_applied(conn, migration.version)? {
            continue;
        }
        let tx = conn.transaction()?;
        (migration.apply)(&tx).map_err(|source| StoreError::MigrationFailed {
            version: migration.version,
            name: migration.name,
            source: Box::new(source),
        })?;
        util::check_foreign_keys(&tx).map_err(|source| StoreError::MigrationFailed {
            version: migration.version,
            name: migration.name,
            source: Box::new(source),
        })?;
        tx.execute(
            "INSERT INTO schema_migrations(version, name, applied_at_ms) VALUES (?1, ?2, ?3)",
            params![migration.version, migration.name, now_ms()],
        )?;
        tx.commit()?;
        applied.push(MigrationEntry {
            version: migration.version,
            name: migration.name,
        });
    }
    Ok(applied)
}

fn prepare_history(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
          version INTEGER PRIMARY KEY,
          name TEXT NOT NULL,
          applied_at_ms INTEGER NOT NULL
        );
"#,
    )?;
    adopt_baseline(conn)
}

// Databases that predate the framework carry live tables but no history rows.
// Stamp the versions their schema already materially contains so the apply
// pass starts from the right place.
fn adopt_baseline(conn: &Connection) -> Result<(), StoreError> {
    let recorded: i64 =
        conn.query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))?;
    if recorded > 0 {
        return Ok(());
    }
    for version in baseline_versions(conn)? {
        stamp(conn, version)?;
    }
    Ok(())
}

// Which versions the live schema already materially contains: empty for a
// fresh database, v1 for the legacy layout, v1+v2 once plant_types is
// garden-scoped. An unrecognizable layout is rejected rather than guessed at.
fn baseline_versions(conn: &Connection) -> Result<Vec<i64>, StoreError> {
    if !util::table_exists(conn, "plant_types")? {
        for table in TABLES {
            if table != "plant_types" && util::table_exists(conn, table)? {
                return Err(StoreError::UnsupportedSchema(
                    "partial table layout (plant_types missing)",
                ));
            }
        }
        // Fresh database: replay everything from v1.
        return Ok(Vec::new());
    }

    for table in LEGACY_TABLES {
        if !util::table_exists(conn, table)? {
            return Err(StoreError::UnsupportedSchema(
                "legacy database is missing expected tables",
            ));
        }
    }

    let mut versions = vec![1];
    if util::column_exists(conn, "plant_types", "garden_id")? {
        if !util::table_exists(conn, "gardens")? {
            return Err(StoreError::UnsupportedSchema(
                "plant_types is garden-scoped but gardens is missing",
            ));
        }
        versions.push(2);
    }
    Ok(versions)
}

fn stamp(conn: &Connection, version: i64) -> Result<(), StoreError> {
    for migration in &MIGRATIONS {
        if migration.version == version {
            conn.execute(
                "INSERT OR IGNORE INTO schema_migrations(version, name, applied_at_ms) \
                 VALUES (?1, ?2, ?3)",
                params![migration.version, migration.name, now_ms()],
            )?;
            return Ok(());
        }
    }
    Err(StoreError::UnsupportedSchema("unknown baseline version"))
}

fn is_applied(conn: &Connection, version: i64) -> Result<bool, StoreError> {
    let found: i64 = conn.query_row(
        "SELECT COUNT(*) FROM schema_migrations WHERE version = ?1",
        params![version],
        |row| row.get(0),
    )?;
    Ok(found > 0)
}

fn list_pending(conn: &Connection) -> Result<Vec<MigrationEntry>, StoreError> {
    let mut out = Vec::new();
    for migration in &MIGRATIONS {
        if !is_applied(conn, migration.version)? {
            out.push(MigrationEntry {
                version: migration.version,
                name: migration.name,
            });
        }
    }
    Ok(out)
}
