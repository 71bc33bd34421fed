//! User account handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use shelf_service::user::RegisterRequest;

use crate::dto::UserResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `POST /users` — register a new account.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.users.register(body).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// `GET /users/me` — profile of the authenticated caller.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.profile(auth.user_id).await?;
    Ok(Json(user.into()))
}
