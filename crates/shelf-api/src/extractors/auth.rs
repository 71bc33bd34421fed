//! `AuthUser` extractor — resolves the `X-Token` header to a user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use shelf_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller, extracted from a valid `X-Token` header.
///
/// Rejects with 401 when the header is missing or the token does not
/// resolve to a live session.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    /// The raw token, kept so logout can revoke it.
    pub token: String,
}

/// Like [`AuthUser`], but anonymous callers pass through as `None`.
/// Used on endpoints where visibility rules decide per record.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<Uuid>);

fn token_header(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get("x-token")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            token_header(parts).ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        let user_id = state
            .sessions
            .resolve(&token)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        Ok(AuthUser { user_id, token })
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = token_header(parts) else {
            return Ok(MaybeAuthUser(None));
        };
        // A stale token reads the same as no token at all.
        let user_id = state.sessions.resolve(&token).await?;
        Ok(MaybeAuthUser(user_id))
    }
}
