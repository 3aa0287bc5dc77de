use actix_web::{web, App, HttpServer};
use roster::config::db::{DbKind, DB_FILE};
use roster::config::server::ServerConfig;
use roster::infra::state::build_state;
use roster::middleware::request_trace::RequestTrace;
use roster::middleware::structured_logger::StructuredLogger;
use roster::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(DbKind::SqliteFile).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };
    info!(db_file = DB_FILE, "Database ready");

    let data = web::Data::new(app_state);

    info!(host = %server.host, port = server.port, "Starting student roster");

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
