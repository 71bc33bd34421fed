//! File record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use shelf_core::error::AppError;
use shelf_core::result::AppResult;
use shelf_core::types::ParentId;

use super::kind::FileKind;

/// A file, image, or folder in a user's namespace.
///
/// The owner and hierarchy position are immutable; the only mutation
/// after creation is flipping `is_public`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The owning user. Ownership cannot be transferred.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Record kind.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Containing folder, or the root sentinel.
    pub parent_id: ParentId,
    /// Whether the content is readable without a session.
    pub is_public: bool,
    /// Opaque blob path. `Some` iff the kind carries content.
    #[serde(skip_serializing, default)]
    pub local_path: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl sqlx::FromRow<'_, PgRow> for FileRecord {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            name: row.try_get("name")?,
            kind: row.try_get("kind")?,
            parent_id: ParentId::from_option(row.try_get("parent_id")?),
            is_public: row.try_get("is_public")?,
            local_path: row.try_get("local_path")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    /// The owning user.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Record kind.
    pub kind: FileKind,
    /// Containing folder, or the root sentinel.
    pub parent_id: ParentId,
    /// Initial visibility.
    pub is_public: bool,
    /// Blob path for content-bearing kinds.
    pub local_path: Option<String>,
}

impl NewFileRecord {
    /// Check the structural invariants every store must uphold.
    ///
    /// The parent-folder check (existence, `kind = folder`) belongs to
    /// the service layer; this only rejects records whose own shape is
    /// inconsistent.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::validation("Missing name"));
        }
        match (self.kind.has_content(), &self.local_path) {
            (true, None) => Err(AppError::validation(format!(
                "A {} record requires a local path",
                self.kind
            ))),
            (false, Some(_)) => Err(AppError::validation("A folder cannot carry a local path")),
            _ => Ok(()),
        }
    }
}
