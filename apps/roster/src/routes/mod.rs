use actix_web::error::{PathError, QueryPayloadError, UrlencodedError};
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod health;
pub mod students;

/// Register every route on `cfg`. Shared by `main` and the test harness.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error));

    cfg.route("/", web::get().to(root));
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/students").configure(students::configure_routes));
}

async fn root() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/students"))
        .finish()
}

fn form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid form: {err}")).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query: {err}")).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid path: {err}")).into()
}
