//! Postgres file record store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use shelf_core::error::{AppError, ErrorKind};
use shelf_core::result::AppResult;
use shelf_core::types::{Page, ParentId};
use shelf_entity::file::{FileRecord, NewFileRecord};

use crate::store::FileStore;

/// Postgres-backed file record store.
#[derive(Debug, Clone)]
pub struct PgFileStore {
    pool: PgPool,
}

impl PgFileStore {
    /// Create a new file store on the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for PgFileStore {
    async fn insert(&self, file: NewFileRecord) -> AppResult<FileRecord> {
        file.validate()?;
        sqlx::query_as::<_, FileRecord>(
            "INSERT INTO files (id, user_id, name, kind, parent_id, is_public, local_path) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(file.user_id)
        .bind(&file.name)
        .bind(file.kind)
        .bind(file.parent_id.as_folder())
        .bind(file.is_public)
        .bind(&file.local_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert file", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn find_by_id_and_owner(&self, id: Uuid, owner: Uuid) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn find_by_owner_and_parent(
        &self,
        owner: Uuid,
        parent: ParentId,
        page: Page,
    ) -> AppResult<Vec<FileRecord>> {
        // IS NOT DISTINCT FROM matches NULL parents too.
        sqlx::query_as::<_, FileRecord>(
            "SELECT * FROM files \
             WHERE user_id = $1 AND parent_id IS NOT DISTINCT FROM $2 \
             ORDER BY created_at, id LIMIT $3 OFFSET $4",
        )
        .bind(owner)
        .bind(parent.as_folder())
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn set_visibility(
        &self,
        id: Uuid,
        owner: Uuid,
        is_public: bool,
    ) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>(
            "UPDATE files SET is_public = $3 WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner)
        .bind(is_public)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update visibility", e))
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))?;
        Ok(total as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e))?;
        Ok(one == 1)
    }
}
