//! In-memory file record store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use shelf_core::result::AppResult;
use shelf_core::types::{Page, ParentId};
use shelf_entity::file::{FileRecord, NewFileRecord};

use crate::store::FileStore;

/// In-memory file record store. Rows keep insertion order, which is
/// what pagination walks.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileStore {
    rows: Arc<RwLock<Vec<FileRecord>>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn insert(&self, file: NewFileRecord) -> AppResult<FileRecord> {
        file.validate()?;
        let stored = FileRecord {
            id: Uuid::new_v4(),
            user_id: file.user_id,
            name: file.name,
            kind: file.kind,
            parent_id: file.parent_id,
            is_public: file.is_public,
            local_path: file.local_path,
            created_at: Utc::now(),
        };
        self.rows.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<FileRecord>> {
        Ok(self.rows.read().await.iter().find(|f| f.id == id).cloned())
    }

    async fn find_by_id_and_owner(&self, id: Uuid, owner: Uuid) -> AppResult<Option<FileRecord>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|f| f.id == id && f.user_id == owner)
            .cloned())
    }

    async fn find_by_owner_and_parent(
        &self,
        owner: Uuid,
        parent: ParentId,
        page: Page,
    ) -> AppResult<Vec<FileRecord>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|f| f.user_id == owner && f.parent_id == parent)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn set_visibility(
        &self,
        id: Uuid,
        owner: Uuid,
        is_public: bool,
    ) -> AppResult<Option<FileRecord>> {
        let mut rows = self.rows.write().await;
        let found = rows
            .iter_mut()
            .find(|f| f.id == id && f.user_id == owner)
            .map(|f| {
                f.is_public = is_public;
                f.clone()
            });
        Ok(found)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.read().await.len() as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_entity::file::FileKind;

    fn folder(owner: Uuid, name: &str, parent: ParentId) -> NewFileRecord {
        NewFileRecord {
            user_id: owner,
            name: name.into(),
            kind: FileKind::Folder,
            parent_id: parent,
            is_public: false,
            local_path: None,
        }
    }

    #[tokio::test]
    async fn listing_is_scoped_to_owner_and_parent() {
        let store = MemoryFileStore::new();
        let alice = Uuid::new_v4();
        let carol = Uuid::new_v4();

        let top = store
            .insert(folder(alice, "docs", ParentId::Root))
            .await
            .unwrap();
        store
            .insert(folder(alice, "notes", ParentId::Folder(top.id)))
            .await
            .unwrap();
        store
            .insert(folder(carol, "music", ParentId::Root))
            .await
            .unwrap();

        let roots = store
            .find_by_owner_and_parent(alice, ParentId::Root, Page::default())
            .await
            .unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name, "docs");

        let children = store
            .find_by_owner_and_parent(alice, ParentId::Folder(top.id), Page::default())
            .await
            .unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "notes");
    }

    #[tokio::test]
    async fn pagination_walks_insertion_order() {
        let store = MemoryFileStore::new();
        let owner = Uuid::new_v4();
        for i in 0..45 {
            store
                .insert(folder(owner, &format!("f{i:02}"), ParentId::Root))
                .await
                .unwrap();
        }

        let first = store
            .find_by_owner_and_parent(owner, ParentId::Root, Page(0))
            .await
            .unwrap();
        assert_eq!(first.len(), 20);
        assert_eq!(first[0].name, "f00");

        let third = store
            .find_by_owner_and_parent(owner, ParentId::Root, Page(2))
            .await
            .unwrap();
        assert_eq!(third.len(), 5);
        assert_eq!(third[0].name, "f40");

        let beyond = store
            .find_by_owner_and_parent(owner, ParentId::Root, Page(3))
            .await
            .unwrap();
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn set_visibility_requires_ownership() {
        let store = MemoryFileStore::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let rec = store
            .insert(folder(owner, "docs", ParentId::Root))
            .await
            .unwrap();

        assert!(
            store
                .set_visibility(rec.id, stranger, true)
                .await
                .unwrap()
                .is_none()
        );

        let updated = store
            .set_visibility(rec.id, owner, true)
            .await
            .unwrap()
            .unwrap();
        assert!(updated.is_public);
    }
}
