//! Cache provider trait for pluggable TTL store backends.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for TTL-keyed lookup backends (Redis or in-memory).
///
/// Values are opaque strings. Absence of a key — never set, deleted,
/// or expired — is a normal outcome reported as `Ok(None)`, not an
/// error; errors are reserved for backend failures.
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist or
    /// has expired. Does not refresh the TTL.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value with a TTL.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// Delete a key. Idempotent: deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether a key currently exists.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
