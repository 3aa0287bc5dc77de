#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod test_support;
pub mod trace_ctx;
pub mod views;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::db::{DbKind, PoolSettings, DB_FILE};
pub use config::server::ServerConfig;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use infra::db::connect_db;
pub use infra::state::build_state;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
