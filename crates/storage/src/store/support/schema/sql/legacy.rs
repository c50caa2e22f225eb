#![forbid(unsafe_code)]

// The pre-garden table set, exactly as databases looked before the scoping
// migration existed: no gardens table, no garden_id columns, and foreign keys
// without ON DELETE CASCADE. Fresh databases replay this as v1 and are then
// tightened by v2, so every database walks the same migration path.
pub(in crate::store) const SQL: &str = r#"
        CREATE TABLE plant_types (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL,
          description TEXT,
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE garden_activities (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          activity_type TEXT NOT NULL CHECK (activity_type IN ('watering', 'fertilizing')),
          activity_date DATE NOT NULL,
          notes TEXT,
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE harvests (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          plant_type_id INTEGER NOT NULL,
          quantity REAL NOT NULL,
          unit TEXT NOT NULL,
          harvest_date DATE NOT NULL,
          notes TEXT,
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
          FOREIGN KEY (plant_type_id) REFERENCES plant_types (id)
        );

        CREATE TABLE plants (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          plant_type_id INTEGER NOT NULL,
          name TEXT NOT NULL,
          planted_date DATE,
          location TEXT,
          status TEXT DEFAULT 'active',
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
          FOREIGN KEY (plant_type_id) REFERENCES plant_types (id)
        );

        CREATE TABLE plant_journals (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          plant_id INTEGER NOT NULL,
          entry_date DATE NOT NULL,
          notes TEXT NOT NULL,
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
          FOREIGN KEY (plant_id) REFERENCES plants (id)
        );
"#;
