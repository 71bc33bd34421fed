//! Persistence traits for users and file records.

use async_trait::async_trait;
use uuid::Uuid;

use shelf_core::result::AppResult;
use shelf_core::types::{Page, ParentId};
use shelf_entity::file::{FileRecord, NewFileRecord};
use shelf_entity::user::{NewUser, User};

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new user and return the stored row.
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Look up a user by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Count all users.
    async fn count(&self) -> AppResult<u64>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Persistence operations for file records.
///
/// Lookups that take an `owner` never return another user's rows.
#[async_trait]
pub trait FileStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new file record and return the stored row.
    async fn insert(&self, file: NewFileRecord) -> AppResult<FileRecord>;

    /// Look up a record by id, regardless of owner.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<FileRecord>>;

    /// Look up a record by id, restricted to the given owner.
    async fn find_by_id_and_owner(&self, id: Uuid, owner: Uuid) -> AppResult<Option<FileRecord>>;

    /// List one page of an owner's records under the given parent,
    /// in insertion order.
    async fn find_by_owner_and_parent(
        &self,
        owner: Uuid,
        parent: ParentId,
        page: Page,
    ) -> AppResult<Vec<FileRecord>>;

    /// Flip the visibility flag on an owner's record. Returns the
    /// updated row, or `None` when the owner has no such record.
    async fn set_visibility(
        &self,
        id: Uuid,
        owner: Uuid,
        is_public: bool,
    ) -> AppResult<Option<FileRecord>>;

    /// Count all file records.
    async fn count(&self) -> AppResult<u64>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
