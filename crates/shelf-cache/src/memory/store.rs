//! In-memory TTL store implementation using the moka crate.
//!
//! Session expiry depends on per-entry TTLs, so each entry carries its
//! own lifetime and a moka [`Expiry`] policy enforces it.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;

use shelf_core::config::cache::MemoryCacheConfig;
use shelf_core::result::AppResult;
use shelf_core::traits::cache::CacheProvider;

/// A cached value together with its requested lifetime.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expiry policy that honors each entry's own TTL.
struct EntryTtl;

impl Expiry<String, Entry> for EntryTtl {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _now: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-memory TTL store provider using moka.
#[derive(Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, Entry>,
}

impl std::fmt::Debug for MemoryCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheProvider")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl MemoryCacheProvider {
    /// Create a new in-memory provider from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(EntryTtl)
            .build();
        Self { cache }
    }
}

impl Default for MemoryCacheProvider {
    fn default() -> Self {
        Self::new(&MemoryCacheConfig::default())
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let entry = Entry {
            value: value.to_string(),
            ttl,
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.remove(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.cache.get(key).await.is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_provider() -> MemoryCacheProvider {
        MemoryCacheProvider::default()
    }

    #[tokio::test]
    async fn set_then_get() {
        let provider = make_provider();
        provider
            .set("key1", "value1", Duration::from_secs(60))
            .await
            .unwrap();
        let val = provider.get("key1").await.unwrap();
        assert_eq!(val, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let provider = make_provider();
        provider
            .set("key2", "value2", Duration::from_secs(60))
            .await
            .unwrap();
        provider.delete("key2").await.unwrap();
        provider.delete("key2").await.unwrap();
        assert_eq!(provider.get("key2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn entry_expires_after_its_own_ttl() {
        let provider = make_provider();
        provider
            .set("short", "v", Duration::from_millis(50))
            .await
            .unwrap();
        provider
            .set("long", "v", Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(provider.get("short").await.unwrap(), None);
        assert_eq!(provider.get("long").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn health_check_always_passes() {
        assert!(make_provider().health_check().await.unwrap());
    }
}
