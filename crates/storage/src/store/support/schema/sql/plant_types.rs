#![forbid(unsafe_code)]

// Parameterized by table name so the rebuild step can create the tightened
// shape under a scratch name before the rename swap.
pub(in crate::store) fn create_sql(table: &str) -> String {
    format!(
        r#"
        CREATE TABLE {table} (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          garden_id INTEGER NOT NULL,
          name TEXT NOT NULL,
          description TEXT,
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
          FOREIGN KEY (garden_id) REFERENCES gardens (id) ON DELETE CASCADE
        );
"#
    )
}

pub(in crate::store) const COLUMNS: &str = "id, garden_id, name, description, created_at";
