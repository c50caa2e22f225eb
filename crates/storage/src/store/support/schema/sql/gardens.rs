#![forbid(unsafe_code)]

pub(in crate::store) const SQL: &str = r#"
        CREATE TABLE IF NOT EXISTS gardens (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL,
          description TEXT,
          year INTEGER,
          location TEXT,
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
"#;
