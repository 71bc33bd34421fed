//! Local filesystem blob store.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use shelf_core::config::storage::StorageConfig;
use shelf_core::error::{AppError, ErrorKind};
use shelf_core::result::AppResult;
use shelf_core::traits::blob::BlobStore;

/// Local filesystem blob store.
///
/// Blobs are written under opaque random names directly beneath the
/// root. Variant reads append `_{tag}` to the stored path.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Root directory for all stored blobs.
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a blob store rooted at the configured path. The root is
    /// created on first use, not here.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: PathBuf::from(&config.root_path),
        }
    }

    fn variant_path(local_path: &str, variant: Option<&str>) -> String {
        match variant {
            Some(tag) => format!("{local_path}_{tag}"),
            None => local_path.to_string(),
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn write(&self, data: Bytes) -> AppResult<String> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", self.root.display()),
                e,
            )
        })?;

        let full_path = self.root.join(Uuid::new_v4().to_string());
        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {}", full_path.display()),
                e,
            )
        })?;

        debug!(path = %full_path.display(), bytes = data.len(), "Wrote blob");
        Ok(full_path.to_string_lossy().into_owned())
    }

    async fn read(&self, local_path: &str, variant: Option<&str>) -> AppResult<Option<Bytes>> {
        let path = Self::variant_path(local_path, variant);
        match fs::read(&path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read blob: {path}"),
                e,
            )),
        }
    }

    async fn exists(&self, local_path: &str) -> AppResult<bool> {
        match fs::metadata(local_path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to stat blob: {local_path}"),
                e,
            )),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        if self.root.exists() {
            return Ok(self.root.is_dir());
        }
        // Root may not exist yet on a fresh install.
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> LocalBlobStore {
        LocalBlobStore::new(&StorageConfig {
            root_path: dir.path().to_string_lossy().into_owned(),
        })
    }

    #[tokio::test]
    async fn write_returns_opaque_path_inside_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let path = store.write(Bytes::from_static(b"Hello")).await.unwrap();
        assert!(path.starts_with(&*dir.path().to_string_lossy()));

        let read = store.read(&path, None).await.unwrap();
        assert_eq!(read, Some(Bytes::from_static(b"Hello")));
    }

    #[tokio::test]
    async fn distinct_writes_get_distinct_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let a = store.write(Bytes::from_static(b"same")).await.unwrap();
        let b = store.write(Bytes::from_static(b"same")).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn missing_blob_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let path = dir.path().join("nope").to_string_lossy().into_owned();
        assert_eq!(store.read(&path, None).await.unwrap(), None);
        assert!(!store.exists(&path).await.unwrap());
    }

    #[tokio::test]
    async fn variant_read_appends_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let path = store.write(Bytes::from_static(b"full")).await.unwrap();
        tokio::fs::write(format!("{path}_250"), b"small").await.unwrap();

        let small = store.read(&path, Some("250")).await.unwrap();
        assert_eq!(small, Some(Bytes::from_static(b"small")));
        assert_eq!(store.read(&path, Some("500")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn root_is_created_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        let store = LocalBlobStore::new(&StorageConfig {
            root_path: nested.to_string_lossy().into_owned(),
        });

        store.write(Bytes::from_static(b"x")).await.unwrap();
        assert!(nested.is_dir());
    }
}
