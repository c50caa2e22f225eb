#![forbid(unsafe_code)]

pub(in crate::store) fn create_sql(table: &str) -> String {
    format!(
        r#"
        CREATE TABLE {table} (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          plant_type_id INTEGER NOT NULL,
          quantity REAL NOT NULL,
          unit TEXT NOT NULL,
          harvest_date DATE NOT NULL,
          notes TEXT,
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
          FOREIGN KEY (plant_type_id) REFERENCES plant_types (id) ON DELETE CASCADE
        );
"#
    )
}

pub(in crate::store) const COLUMNS: &str =
    "id, plant_type_id, quantity, unit, harvest_date, notes, created_at";
