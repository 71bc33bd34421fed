//! Instance status and statistics handlers.

use axum::Json;
use axum::extract::State;

use shelf_core::traits::cache::CacheProvider;

use crate::dto::{StatsResponse, StatusResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /status` — liveness of the TTL store and the database.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    // A store that errors out is down, not a failed request.
    let redis = state.cache.health_check().await.unwrap_or(false);
    let db = state.users.health_check().await.unwrap_or(false);
    Json(StatusResponse { redis, db })
}

/// `GET /stats` — row counts for users and files.
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let users = state.users.count().await?;
    let files = state.files.count().await?;
    Ok(Json(StatsResponse { users, files }))
}
