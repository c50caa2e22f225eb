#![forbid(unsafe_code)]

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Sql(rusqlite::Error),
    InvalidInput(&'static str),
    UnknownId,
    UnsupportedSchema(&'static str),
    MigrationFailed {
        version: i64,
        name: &'static str,
        source: Box<StoreError>,
    },
    MigrationIncomplete {
        table: &'static str,
        expected: i64,
        actual: i64,
    },
    ForeignKeyViolations {
        table: String,
        count: i64,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io: {err}"),
            Self::Sql(err) => write!(f, "sqlite: {err}"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::UnknownId => write!(f, "unknown id"),
            Self::UnsupportedSchema(message) => write!(f, "unsupported schema: {message}"),
            Self::MigrationFailed {
                version,
                name,
                source,
            } => write!(f, "migration v{version} {name} failed: {source}"),
            Self::MigrationIncomplete {
                table,
                expected,
                actual,
            } => write!(
                f,
                "migration incomplete: {table} (expected={expected}, actual={actual})"
            ),
            Self::ForeignKeyViolations { table, count } => {
                write!(f, "foreign key violations ({count}, first in {table})")
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sql(value)
    }
}
