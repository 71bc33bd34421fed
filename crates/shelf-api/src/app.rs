//! Application builder — wires stores, services, and router together.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use shelf_auth::{CredentialVerifier, SessionStore};
use shelf_cache::CacheManager;
use shelf_core::config::AppConfig;
use shelf_core::error::AppError;
use shelf_database::DatabasePool;
use shelf_database::postgres::{PgFileStore, PgUserStore};
use shelf_service::{FileService, UserService};
use shelf_storage::LocalBlobStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from prepared state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Shelf server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    info!("Starting Shelf server...");

    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    let user_store = Arc::new(PgUserStore::new(db.pool().clone()));
    let file_store = Arc::new(PgFileStore::new(db.pool().clone()));
    let blob_store = Arc::new(LocalBlobStore::new(&config.storage));

    let sessions = Arc::new(SessionStore::new(cache.clone(), &config.session));
    let credentials = Arc::new(CredentialVerifier::new(user_store.clone()));
    let users = Arc::new(UserService::new(user_store));
    let files = Arc::new(FileService::new(file_store, blob_store));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        cache,
        sessions,
        credentials,
        users,
        files,
    };

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(
            shelf_core::error::ErrorKind::Configuration,
            format!("Failed to bind {addr}"),
            e,
        ))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
