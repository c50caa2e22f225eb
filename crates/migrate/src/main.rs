#![forbid(unsafe_code)]

use gl_storage::{MigrationReport, SqliteStore, pending_migrations};
use serde_json::json;
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "garden.db";

#[derive(Debug, PartialEq, Eq)]
struct MigrateConfig {
    db_path: PathBuf,
    check: bool,
    json: bool,
}

fn usage() -> &'static str {
    "gl_migrate — bring a garden logger database to the current schema\n\n\
USAGE:\n\
  gl_migrate [--db PATH] [--check] [--json]\n\n\
NOTES:\n\
  - Without flags, applies pending migrations once and prints a row-count report.\n\
  - `--check` lists pending migrations without applying them; exits 1 if any are pending.\n\
  - `--json` emits the report as JSON.\n\
  - The database path defaults to garden.db.\n\
  - Exit codes: 0 success, 1 failed or pending, 2 usage error.\n"
}

fn parse_args(args: &[String]) -> Result<MigrateConfig, String> {
    let mut db_path: Option<PathBuf> = None;
    let mut check = false;
    let mut json = false;

    let mut i = 0usize;
    while i < args.len() {
        let a = args[i].as_str();
        match a {
            "--db" => {
                i += 1;
                let v = args.get(i).ok_or("--db requires PATH")?;
                db_path = Some(PathBuf::from(v));
            }
            "--check" => check = true,
            "--json" => json = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(MigrateConfig {
        db_path: db_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
        check,
        json,
    })
}

fn print_report(report: &MigrationReport, as_json: bool) {
    if as_json {
        let applied = report
            .applied
            .iter()
            .map(|m| json!({"version": m.version, "name": m.name}))
            .collect::<Vec<_>>();
        let tables = report
            .tables
            .iter()
            .map(|t| json!({"table": t.table, "rows": t.rows}))
            .collect::<Vec<_>>();
        println!("{}", json!({"applied": applied, "tables": tables}));
        return;
    }

    if report.applied.is_empty() {
        println!("database is up to date");
    } else {
        println!("applied migrations:");
        for m in &report.applied {
            println!("  v{} {}", m.version, m.name);
        }
    }
    println!("table rows:");
    for t in &report.tables {
        println!("  {} {}", t.table, t.rows);
    }
}

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print!("{}", usage());
        return;
    }

    let cfg = match parse_args(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}\n\n{}", usage());
            std::process::exit(2);
        }
    };

    if cfg.check {
        let pending = match pending_migrations(&cfg.db_path) {
            Ok(pending) => pending,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        };
        if cfg.json {
            let entries = pending
                .iter()
                .map(|m| json!({"version": m.version, "name": m.name}))
                .collect::<Vec<_>>();
            println!("{}", json!({"pending": entries}));
        } else if pending.is_empty() {
            println!("database is up to date");
        } else {
            println!("pending migrations:");
            for m in &pending {
                println!("  v{} {}", m.version, m.name);
            }
        }
        if !pending.is_empty() {
            std::process::exit(1);
        }
        return;
    }

    match SqliteStore::open_with_report(&cfg.db_path) {
        Ok((_store, report)) => print_report(&report, cfg.json),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
