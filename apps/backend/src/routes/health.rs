//! Liveness endpoint. Always answers 200; database trouble is reported in the
//! body so probes can tell a degraded store from a dead process.

use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

/// What a round trip to the store found.
enum DbProbe {
    Ok { migrations: String },
    Failed(String),
}

async fn probe(db: &DatabaseConnection) -> DbProbe {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1");
    if let Err(e) = db.query_one(ping).await {
        return DbProbe::Failed(format!("DB query failed: {e}"));
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };
    DbProbe::Ok { migrations }
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let probe = match require_db(&app_state) {
        Ok(db) => probe(db).await,
        Err(e) => DbProbe::Failed(format!("DB unavailable: {e}")),
    };

    let (db, db_error, migrations) = match probe {
        DbProbe::Ok { migrations } => ("ok", None, migrations),
        DbProbe::Failed(reason) => ("error", Some(reason), "unknown".to_string()),
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_error,
        migrations,
        time: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
