//! SeaORM -> DomainError translation.
//!
//! Repositories convert every `sea_orm::DbErr` here so that views only ever
//! see `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn is_timeout(msg: &str) -> bool {
    msg.contains("timed out") || msg.contains("timeout") || msg.contains("database is locked")
}

/// Translate a `DbErr` into a `DomainError` with a PII-safe detail.
///
/// The detail keeps the engine's message (redacted) because the UI shows
/// it inline next to "Error adding student" and similar prefixes.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(
                InfraErrorKind::DbUnavailable,
                format!("database unavailable: {}", Redacted(&error_msg)),
            );
        }
        _ => {}
    }

    if is_timeout(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(
            InfraErrorKind::Timeout,
            format!("database timeout: {}", Redacted(&error_msg)),
        );
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database operation failed");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        Redacted(&error_msg).to_string(),
    )
}
