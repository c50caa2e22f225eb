#![forbid(unsafe_code)]

mod migrations;
mod sql;

pub(in crate::store) use migrations::{full_chain, migrate, pending, table_counts};
pub use migrations::{MigrationEntry, MigrationReport, TableCount};
