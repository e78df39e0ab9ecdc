use actix_web::{web, App, HttpServer};
use croupier::config::db::DbProfile;
use croupier::config::server::ServerConfig;
use croupier::infra::state::build_state;
use croupier::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use croupier::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(DbProfile::Env).build().await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    tracing::info!(host = %server.host, port = server.port, "starting croupier");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
