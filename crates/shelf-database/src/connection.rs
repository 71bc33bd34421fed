//! Postgres connection pool setup and migrations.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use shelf_core::config::DatabaseConfig;
use shelf_core::error::{AppError, ErrorKind};
use shelf_core::result::AppResult;

/// Wrapper around the Postgres connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connect to Postgres using the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        info!(
            max_connections = config.max_connections,
            "Connecting to Postgres"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to connect to Postgres", e)
            })?;

        info!("Successfully connected to Postgres");
        Ok(Self { pool })
    }

    /// Run pending schema migrations.
    pub async fn migrate(&self) -> AppResult<()> {
        info!("Running database migrations");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Migration failed", e))?;
        info!("Migrations complete");
        Ok(())
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
