//! File and folder handlers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use uuid::Uuid;

use shelf_core::error::AppError;
use shelf_core::types::{Page, ParentId};
use shelf_entity::file::FileRecord;
use shelf_service::file::CreateFileRequest;

use crate::error::ApiError;
use crate::extractors::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

/// Listing parameters. Both are free-form strings because unusable
/// values degrade gracefully instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    pub parent_id: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataQuery {
    pub size: Option<String>,
}

/// Route ids are parsed by hand so a malformed id reads as a missing
/// record rather than a syntax error.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    raw.parse::<Uuid>()
        .map_err(|_| AppError::not_found("Not found"))
}

/// `POST /files` — create a folder or upload a file.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateFileRequest>,
) -> Result<(StatusCode, Json<FileRecord>), ApiError> {
    let record = state.files.create(auth.user_id, body).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /files/{id}` — fetch one of the caller's records.
pub async fn show(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileRecord>, ApiError> {
    let record = state.files.get_one(auth.user_id, parse_id(&id)?).await?;
    Ok(Json(record))
}

/// `GET /files` — list the caller's records under a parent, one page
/// at a time.
pub async fn index(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let parent = match query.parent_id.as_deref() {
        None => ParentId::Root,
        Some(raw) => match ParentId::from_str(raw) {
            Ok(parent) => parent,
            // An unparsable parent can match nothing.
            Err(_) => return Ok(Json(Vec::new())),
        },
    };
    let page = Page(
        query
            .page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(0),
    );

    let records = state.files.list(auth.user_id, parent, page).await?;
    Ok(Json(records))
}

/// `PUT /files/{id}/publish` — make a record public.
pub async fn publish(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileRecord>, ApiError> {
    let record = state
        .files
        .set_visibility(auth.user_id, parse_id(&id)?, true)
        .await?;
    Ok(Json(record))
}

/// `PUT /files/{id}/unpublish` — make a record private again.
pub async fn unpublish(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileRecord>, ApiError> {
    let record = state
        .files
        .set_visibility(auth.user_id, parse_id(&id)?, false)
        .await?;
    Ok(Json(record))
}

/// `GET /files/{id}/data` — stream a record's content. Works without
/// a token for public records.
pub async fn data(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(id): Path<String>,
    Query(query): Query<DataQuery>,
) -> Result<Response, ApiError> {
    let download = state
        .files
        .download(viewer.0, parse_id(&id)?, query.size.as_deref())
        .await?;

    Ok((
        [(header::CONTENT_TYPE, download.content_type)],
        download.content,
    )
        .into_response())
}
