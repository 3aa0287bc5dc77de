use std::path::PathBuf;

use tracing::info;

use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::{connect_db, connect_db_at};
use crate::infra::schema::ensure_schema;
use crate::state::app_state::AppState;

enum DbTarget {
    Kind(DbKind),
    File(PathBuf),
}

/// Builder for `AppState` (used by both `main` and tests).
pub struct StateBuilder {
    target: DbTarget,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            target: DbTarget::Kind(DbKind::SqliteFile),
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.target = DbTarget::Kind(kind);
        self
    }

    /// Point at an explicit SQLite file instead of the fixed `data.db`.
    pub fn with_db_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target = DbTarget::File(path.into());
        self
    }

    /// Connect and make sure the `students` table exists.
    pub async fn build(self) -> Result<AppState, AppError> {
        let conn = match &self.target {
            DbTarget::Kind(kind) => connect_db(*kind).await?,
            DbTarget::File(path) => connect_db_at(path).await?,
        };
        ensure_schema(&conn).await?;
        info!("schema ready");
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
