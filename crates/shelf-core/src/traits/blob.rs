//! Blob storage trait.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for raw byte storage keyed by generated opaque names.
///
/// A blob that does not exist on the medium — including a size variant
/// that was never generated — is a normal outcome reported as
/// `Ok(None)`, not an error.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Write bytes under a freshly generated opaque path and return it.
    /// Creates the storage root if absent.
    async fn write(&self, data: Bytes) -> AppResult<String>;

    /// Read a blob, or a size variant of it when `variant` is given.
    async fn read(&self, local_path: &str, variant: Option<&str>) -> AppResult<Option<Bytes>>;

    /// Check whether a blob exists on the medium.
    async fn exists(&self, local_path: &str) -> AppResult<bool>;

    /// Check that the storage root is usable.
    async fn health_check(&self) -> AppResult<bool>;
}
