//! Route definitions for the Shelf HTTP API.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(file_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Session endpoints: login, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/connect", get(handlers::auth::connect))
        .route("/disconnect", get(handlers::auth::disconnect))
}

/// Account endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::users::create))
        .route("/users/me", get(handlers::users::me))
}

/// File metadata and content endpoints
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", post(handlers::files::create))
        .route("/files", get(handlers::files::index))
        .route("/files/{id}", get(handlers::files::show))
        .route("/files/{id}/publish", put(handlers::files::publish))
        .route("/files/{id}/unpublish", put(handlers::files::unpublish))
        .route("/files/{id}/data", get(handlers::files::data))
}

/// Instance health and statistics
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::health::status))
        .route("/stats", get(handlers::health::stats))
}
