//! Helpers shared by unit and integration tests.

pub mod app_builder;

pub use app_builder::{create_test_app, TestAppBuilder};

use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::state::build_state;
use crate::state::app_state::AppState;

/// Fresh, private in-memory database with the schema in place.
pub async fn memory_state() -> Result<AppState, AppError> {
    build_state().with_db(DbKind::SqliteMemory).build().await
}
