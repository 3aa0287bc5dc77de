use actix_web::{web, HttpResponse};
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    db: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let db = app_state.db();
    let probe = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1 AS health_check".to_string(),
        ))
        .await;

    let (db_status, db_error) = match probe {
        Ok(_) => ("ok".to_string(), None),
        Err(e) => {
            warn!(error = %e, "Health probe failed");
            ("error".to_string(), Some(format!("DB query failed: {e}")))
        }
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        db: db_status,
        db_error,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
