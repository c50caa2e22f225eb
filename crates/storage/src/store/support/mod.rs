#![forbid(unsafe_code)]

mod schema;
mod time;

pub(super) use schema::{full_chain, migrate, pending, table_counts};
pub use schema::{MigrationEntry, MigrationReport, TableCount};
