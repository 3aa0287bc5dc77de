use std::time::Duration;

/// Fixed location of the student database, relative to the working directory.
pub const DB_FILE: &str = "data.db";

/// Which SQLite database the pool is opened against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// The on-disk `data.db` next to the process.
    SqliteFile,
    /// A private in-memory database (tests).
    SqliteMemory,
}

impl DbKind {
    /// Connection string understood by sqlx's SQLite driver.
    pub fn url(self) -> String {
        match self {
            DbKind::SqliteFile => format!("sqlite://{DB_FILE}"),
            DbKind::SqliteMemory => "sqlite::memory:".to_string(),
        }
    }

    pub fn engine_label(self) -> &'static str {
        match self {
            DbKind::SqliteFile => "sqlite file",
            DbKind::SqliteMemory => "sqlite memory",
        }
    }
}

/// Pool sizing and per-connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub busy_timeout_ms: u32,
    /// When false, connections are never reaped for idleness or age.
    pub recycle: bool,
}

impl PoolSettings {
    /// Defaults per database kind.
    ///
    /// Every in-memory connection is its own database, so the memory pool
    /// is pinned to a single connection that is never recycled.
    pub fn for_kind(kind: DbKind) -> Self {
        match kind {
            DbKind::SqliteFile => Self {
                min_connections: 1,
                max_connections: 4,
                acquire_timeout: Duration::from_secs(5),
                busy_timeout_ms: 5_000,
                recycle: true,
            },
            DbKind::SqliteMemory => Self {
                min_connections: 1,
                max_connections: 1,
                acquire_timeout: Duration::from_secs(5),
                busy_timeout_ms: 5_000,
                recycle: false,
            },
        }
    }
}
