use std::str::FromStr;

use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, trace};

use crate::config::db::{DbKind, PoolSettings};
use crate::error::AppError;

/// Open a pooled connection to the database of the given kind.
///
/// The pool is the storage handle for the whole process; each repository
/// call checks one connection out for a single statement. No schema work
/// happens here (see `infra::schema::ensure_schema`).
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    connect_db_with(kind, &PoolSettings::for_kind(kind)).await
}

pub async fn connect_db_with(
    kind: DbKind,
    settings: &PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = kind.url();
    let connect_opts = SqliteConnectOptions::from_str(&url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true)
        .busy_timeout(std::time::Duration::from_millis(u64::from(
            settings.busy_timeout_ms,
        )));

    connect_with_options(connect_opts, kind.engine_label(), settings).await
}

/// Open a pool against an explicit SQLite file (used by tests that need a
/// real file without touching the working directory).
pub async fn connect_db_at(path: &std::path::Path) -> Result<DatabaseConnection, AppError> {
    let settings = PoolSettings::for_kind(DbKind::SqliteFile);
    let connect_opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .busy_timeout(std::time::Duration::from_millis(u64::from(
            settings.busy_timeout_ms,
        )));

    connect_with_options(connect_opts, "sqlite file", &settings).await
}

async fn connect_with_options(
    connect_opts: SqliteConnectOptions,
    engine: &str,
    settings: &PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let mut pool_opts = SqlitePoolOptions::new()
        .min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout);
    if !settings.recycle {
        pool_opts = pool_opts.idle_timeout(None).max_lifetime(None);
    }

    let pool: SqlitePool = pool_opts
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite connection pool: {e}")))?;

    // Warm-up so a broken database file fails at startup, not on first click.
    sqlx::query("SELECT 1;")
        .execute(&pool)
        .await
        .map_err(|e| AppError::config(format!("warmup query failed: {e}")))?;
    trace!("db=sqlite warmup ok");

    info!(
        engine,
        min = settings.min_connections,
        max = settings.max_connections,
        "pool=create"
    );

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}
