use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

fn engine(url: &str) -> &'static str {
    if url.starts_with("sqlite:") {
        "sqlite"
    } else {
        "postgresql"
    }
}

/// Open a connection pool for the profile. Does NOT run migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let mut opts = ConnectOptions::new(url.clone());
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // Every pooled connection to sqlite::memory: is its own database.
    if profile.is_sqlite_memory() {
        opts.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(opts).await.map_err(|e| {
        error!(engine = engine(&url), error = %e, "failed to connect to database");
        AppError::db_unavailable()
    })?;

    info!(engine = engine(&url), "database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    Ok(conn)
}
