//! File and folder operations: upload, lookup, listing, visibility,
//! and content download.

use std::str::FromStr;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use shelf_core::error::AppError;
use shelf_core::result::AppResult;
use shelf_core::traits::blob::BlobStore;
use shelf_core::types::{Page, ParentId};
use shelf_database::FileStore;
use shelf_entity::file::{FileKind, FileRecord, NewFileRecord};
use shelf_storage::mime;

/// Upload payload. `data` carries base64 content and is required for
/// everything except folders.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateFileRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub parent_id: Option<ParentId>,
    pub is_public: bool,
    pub data: Option<String>,
}

/// A blob ready to stream back, with its guessed content type.
#[derive(Debug, Clone)]
pub struct DownloadedFile {
    pub content: Bytes,
    pub content_type: &'static str,
}

/// Handles file metadata and content operations.
#[derive(Debug, Clone)]
pub struct FileService {
    files: Arc<dyn FileStore>,
    blobs: Arc<dyn BlobStore>,
}

impl FileService {
    pub fn new(files: Arc<dyn FileStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { files, blobs }
    }

    /// Create a folder or upload a file for the given owner.
    ///
    /// The blob is written before the metadata row, so a crash in
    /// between leaves an orphaned blob rather than a dangling record.
    pub async fn create(&self, owner: Uuid, request: CreateFileRequest) -> AppResult<FileRecord> {
        let name = match request.name.as_deref() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => return Err(AppError::validation("Missing name")),
        };
        let kind = request
            .kind
            .as_deref()
            .and_then(|k| FileKind::from_str(k).ok())
            .ok_or_else(|| AppError::validation("Missing type"))?;

        // Payload errors take precedence over parent errors.
        let content = if kind.has_content() {
            let data = match request.data.as_deref() {
                Some(d) if !d.is_empty() => d,
                _ => return Err(AppError::validation("Missing data")),
            };
            Some(
                BASE64
                    .decode(data)
                    .map_err(|_| AppError::validation("Invalid data"))?,
            )
        } else {
            None
        };

        let parent_id = request.parent_id.unwrap_or_default();
        if let Some(folder_id) = parent_id.as_folder() {
            let parent = self
                .files
                .find_by_id(folder_id)
                .await?
                .ok_or_else(|| AppError::validation("Parent not found"))?;
            if parent.kind != FileKind::Folder {
                return Err(AppError::validation("Parent is not a folder"));
            }
        }

        let local_path = match content {
            Some(content) => Some(self.blobs.write(Bytes::from(content)).await?),
            None => None,
        };

        let record = self
            .files
            .insert(NewFileRecord {
                user_id: owner,
                name,
                kind,
                parent_id,
                is_public: request.is_public,
                local_path,
            })
            .await?;

        info!(file_id = %record.id, kind = %record.kind, "Created file record");
        Ok(record)
    }

    /// Fetch one of the owner's records. Records of other users read
    /// as absent.
    pub async fn get_one(&self, owner: Uuid, id: Uuid) -> AppResult<FileRecord> {
        self.files
            .find_by_id_and_owner(id, owner)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }

    /// List one page of the owner's records under a parent. A parent
    /// that does not exist simply yields an empty page.
    pub async fn list(
        &self,
        owner: Uuid,
        parent: ParentId,
        page: Page,
    ) -> AppResult<Vec<FileRecord>> {
        self.files.find_by_owner_and_parent(owner, parent, page).await
    }

    /// Flip a record's visibility. Only the owner can do this.
    pub async fn set_visibility(
        &self,
        owner: Uuid,
        id: Uuid,
        is_public: bool,
    ) -> AppResult<FileRecord> {
        self.files
            .set_visibility(id, owner, is_public)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }

    /// Read a record's content. Public records are readable by anyone,
    /// private ones only by their owner. Denial is indistinguishable
    /// from absence.
    pub async fn download(
        &self,
        viewer: Option<Uuid>,
        id: Uuid,
        size: Option<&str>,
    ) -> AppResult<DownloadedFile> {
        let record = self
            .files
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))?;

        if !record.is_public && viewer != Some(record.user_id) {
            return Err(AppError::not_found("Not found"));
        }
        if record.kind == FileKind::Folder {
            return Err(AppError::invalid_operation("A folder doesn't have content"));
        }

        let local_path = record
            .local_path
            .as_deref()
            .ok_or_else(|| AppError::not_found("Not found"))?;
        let content = self
            .blobs
            .read(local_path, size)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))?;

        Ok(DownloadedFile {
            content,
            content_type: mime::content_type_for(&record.name),
        })
    }

    /// Total number of file records.
    pub async fn count(&self) -> AppResult<u64> {
        self.files.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::config::storage::StorageConfig;
    use shelf_core::error::ErrorKind;
    use shelf_database::memory::MemoryFileStore;
    use shelf_storage::LocalBlobStore;

    fn make_service(dir: &tempfile::TempDir) -> FileService {
        let blobs = LocalBlobStore::new(&StorageConfig {
            root_path: dir.path().to_string_lossy().into_owned(),
        });
        FileService::new(Arc::new(MemoryFileStore::new()), Arc::new(blobs))
    }

    fn folder_request(name: &str) -> CreateFileRequest {
        CreateFileRequest {
            name: Some(name.to_string()),
            kind: Some("folder".to_string()),
            ..Default::default()
        }
    }

    fn file_request(name: &str, data: &str) -> CreateFileRequest {
        CreateFileRequest {
            name: Some(name.to_string()),
            kind: Some("file".to_string()),
            data: Some(BASE64.encode(data)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn upload_stores_decoded_content() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let owner = Uuid::new_v4();

        let record = service
            .create(owner, file_request("hello.txt", "Hello Webstack!"))
            .await
            .unwrap();
        assert_eq!(record.kind, FileKind::File);
        assert!(record.local_path.is_some());

        let download = service.download(Some(owner), record.id, None).await.unwrap();
        assert_eq!(download.content, Bytes::from_static(b"Hello Webstack!"));
        assert_eq!(download.content_type, "text/plain");
    }

    #[tokio::test]
    async fn create_validates_required_fields() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let owner = Uuid::new_v4();

        let no_name = CreateFileRequest {
            kind: Some("file".into()),
            ..Default::default()
        };
        assert_eq!(
            service.create(owner, no_name).await.unwrap_err().message,
            "Missing name"
        );

        let bad_type = CreateFileRequest {
            name: Some("x".into()),
            kind: Some("archive".into()),
            ..Default::default()
        };
        assert_eq!(
            service.create(owner, bad_type).await.unwrap_err().message,
            "Missing type"
        );

        let no_data = CreateFileRequest {
            name: Some("x".into()),
            kind: Some("file".into()),
            ..Default::default()
        };
        assert_eq!(
            service.create(owner, no_data).await.unwrap_err().message,
            "Missing data"
        );

        let bad_data = CreateFileRequest {
            name: Some("x".into()),
            kind: Some("file".into()),
            data: Some("not base64 !!!".into()),
            ..Default::default()
        };
        assert_eq!(
            service.create(owner, bad_data).await.unwrap_err().message,
            "Invalid data"
        );
    }

    #[tokio::test]
    async fn folders_need_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let record = service
            .create(Uuid::new_v4(), folder_request("images"))
            .await
            .unwrap();
        assert_eq!(record.kind, FileKind::Folder);
        assert!(record.local_path.is_none());
        assert_eq!(record.parent_id, ParentId::Root);
    }

    #[tokio::test]
    async fn parent_must_exist_and_be_a_folder() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let owner = Uuid::new_v4();

        let mut orphan = folder_request("sub");
        orphan.parent_id = Some(ParentId::Folder(Uuid::new_v4()));
        assert_eq!(
            service.create(owner, orphan).await.unwrap_err().message,
            "Parent not found"
        );

        let leaf = service
            .create(owner, file_request("a.txt", "x"))
            .await
            .unwrap();
        let mut under_leaf = folder_request("sub");
        under_leaf.parent_id = Some(ParentId::Folder(leaf.id));
        assert_eq!(
            service.create(owner, under_leaf).await.unwrap_err().message,
            "Parent is not a folder"
        );
    }

    #[tokio::test]
    async fn parent_folder_may_belong_to_another_user() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let landlord = Uuid::new_v4();
        let tenant = Uuid::new_v4();

        let shared = service
            .create(landlord, folder_request("shared"))
            .await
            .unwrap();

        let mut upload = file_request("note.txt", "hi");
        upload.parent_id = Some(ParentId::Folder(shared.id));
        let record = service.create(tenant, upload).await.unwrap();
        assert_eq!(record.user_id, tenant);
        assert_eq!(record.parent_id, ParentId::Folder(shared.id));
    }

    #[tokio::test]
    async fn missing_data_is_reported_before_parent_errors() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);

        let request = CreateFileRequest {
            name: Some("x".into()),
            kind: Some("file".into()),
            parent_id: Some(ParentId::Folder(Uuid::new_v4())),
            ..Default::default()
        };
        assert_eq!(
            service
                .create(Uuid::new_v4(), request)
                .await
                .unwrap_err()
                .message,
            "Missing data"
        );
    }

    #[tokio::test]
    async fn lookups_are_owner_scoped() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let record = service.create(owner, folder_request("docs")).await.unwrap();

        assert!(service.get_one(owner, record.id).await.is_ok());
        let err = service.get_one(stranger, record.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn publish_then_unpublish() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let owner = Uuid::new_v4();
        let record = service
            .create(owner, file_request("a.txt", "x"))
            .await
            .unwrap();
        assert!(!record.is_public);

        let published = service
            .set_visibility(owner, record.id, true)
            .await
            .unwrap();
        assert!(published.is_public);

        let unpublished = service
            .set_visibility(owner, record.id, false)
            .await
            .unwrap();
        assert!(!unpublished.is_public);

        let err = service
            .set_visibility(Uuid::new_v4(), record.id, true)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn private_content_reads_as_absent_to_others() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let owner = Uuid::new_v4();
        let record = service
            .create(owner, file_request("secret.txt", "hidden"))
            .await
            .unwrap();

        // Anonymous and other users both get a plain not-found.
        for viewer in [None, Some(Uuid::new_v4())] {
            let err = service.download(viewer, record.id, None).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::NotFound);
        }

        service.set_visibility(owner, record.id, true).await.unwrap();
        let download = service.download(None, record.id, None).await.unwrap();
        assert_eq!(download.content, Bytes::from_static(b"hidden"));
    }

    #[tokio::test]
    async fn folders_have_no_content() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let owner = Uuid::new_v4();
        let record = service.create(owner, folder_request("docs")).await.unwrap();

        let err = service
            .download(Some(owner), record.id, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOperation);
        assert_eq!(err.message, "A folder doesn't have content");
    }

    #[tokio::test]
    async fn missing_size_variant_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let owner = Uuid::new_v4();
        let record = service
            .create(owner, file_request("img.png", "pixels"))
            .await
            .unwrap();

        let err = service
            .download(Some(owner), record.id, Some("250"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        // Write the variant alongside the original and retry.
        let path = record.local_path.clone().unwrap();
        tokio::fs::write(format!("{path}_250"), b"small").await.unwrap();
        let download = service
            .download(Some(owner), record.id, Some("250"))
            .await
            .unwrap();
        assert_eq!(download.content, Bytes::from_static(b"small"));
        assert_eq!(download.content_type, "image/png");
    }

    #[tokio::test]
    async fn listing_pages_hold_twenty_records() {
        let dir = tempfile::tempdir().unwrap();
        let service = make_service(&dir);
        let owner = Uuid::new_v4();

        for i in 0..25 {
            service
                .create(owner, folder_request(&format!("f{i:02}")))
                .await
                .unwrap();
        }

        let first = service.list(owner, ParentId::Root, Page(0)).await.unwrap();
        assert_eq!(first.len(), 20);
        let second = service.list(owner, ParentId::Root, Page(1)).await.unwrap();
        assert_eq!(second.len(), 5);

        // Unknown parents list as empty, not as errors.
        let empty = service
            .list(owner, ParentId::Folder(Uuid::new_v4()), Page(0))
            .await
            .unwrap();
        assert!(empty.is_empty());
    }
}
