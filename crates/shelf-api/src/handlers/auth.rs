//! Login and logout handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use shelf_core::error::AppError;

use crate::dto::TokenResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `GET /connect` — exchange Basic credentials for a session token.
pub async fn connect(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, ApiError> {
    let (email, password) = basic_credentials(&headers)?;
    let user = state.credentials.verify(&email, &password).await?;
    let token = state.sessions.issue(user.id).await?;
    Ok(Json(TokenResponse { token }))
}

/// `GET /disconnect` — revoke the caller's session.
pub async fn disconnect(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, ApiError> {
    state.sessions.revoke(&auth.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Pull an `email:password` pair out of a Basic Authorization header.
/// Every malformation collapses into the same 401, as a login failure
/// rather than a missing-session one.
fn basic_credentials(headers: &HeaderMap) -> Result<(String, String), AppError> {
    let rejected = || AppError::unauthenticated("Unauthorized");

    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(rejected)?;
    let encoded = header.strip_prefix("Basic ").ok_or_else(rejected)?;

    let decoded = BASE64.decode(encoded).map_err(|_| rejected())?;
    let pair = String::from_utf8(decoded).map_err(|_| rejected())?;
    let (email, password) = pair.split_once(':').ok_or_else(rejected)?;

    Ok((email.to_string(), password.to_string()))
}
