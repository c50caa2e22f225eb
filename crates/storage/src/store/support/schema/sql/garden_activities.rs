#![forbid(unsafe_code)]

pub(in crate::store) fn create_sql(table: &str) -> String {
    format!(
        r#"
        CREATE TABLE {table} (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          garden_id INTEGER NOT NULL,
          activity_type TEXT NOT NULL CHECK (activity_type IN ('watering', 'fertilizing')),
          activity_date DATE NOT NULL,
          notes TEXT,
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
          FOREIGN KEY (garden_id) REFERENCES gardens (id) ON DELETE CASCADE
        );
"#
    )
}

pub(in crate::store) const COLUMNS: &str =
    "id, garden_id, activity_type, activity_date, notes, created_at";
