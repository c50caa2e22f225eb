#![forbid(unsafe_code)]

pub(in crate::store) fn create_sql(table: &str) -> String {
    format!(
        r#"
        CREATE TABLE {table} (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          plant_id INTEGER NOT NULL,
          entry_date DATE NOT NULL,
          notes TEXT NOT NULL,
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
          FOREIGN KEY (plant_id) REFERENCES plants (id) ON DELETE CASCADE
        );
"#
    )
}

pub(in crate::store) const COLUMNS: &str = "id, plant_id, entry_date, notes, created_at";
