//! Session token issuance and resolution.
//!
//! Tokens are opaque UUIDs held in the TTL store under a
//! `auth:{token}` key. Expiry is fixed at issuance; reads do not
//! extend it.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use uuid::Uuid;

use shelf_cache::keys;
use shelf_core::config::session::SessionConfig;
use shelf_core::error::AppError;
use shelf_core::result::AppResult;
use shelf_core::traits::cache::CacheProvider;

/// Issues, resolves, and revokes session tokens.
#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: Arc<dyn CacheProvider>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a session store over the given TTL store.
    pub fn new(cache: Arc<dyn CacheProvider>, config: &SessionConfig) -> Self {
        Self {
            cache,
            ttl: config.ttl(),
        }
    }

    /// Issue a fresh token for the given user.
    pub async fn issue(&self, user_id: Uuid) -> AppResult<String> {
        let token = Uuid::new_v4().to_string();
        self.cache
            .set(&keys::session_token(&token), &user_id.to_string(), self.ttl)
            .await?;
        info!(%user_id, "Issued session token");
        Ok(token)
    }

    /// Resolve a token to its user id. Unknown or expired tokens
    /// resolve to `None`.
    pub async fn resolve(&self, token: &str) -> AppResult<Option<Uuid>> {
        let Some(raw) = self.cache.get(&keys::session_token(token)).await? else {
            return Ok(None);
        };
        let user_id = raw
            .parse::<Uuid>()
            .map_err(|e| AppError::internal(format!("Malformed session entry: {e}")))?;
        Ok(Some(user_id))
    }

    /// Revoke a token. Revoking an unknown token is a no-op.
    pub async fn revoke(&self, token: &str) -> AppResult<()> {
        self.cache.delete(&keys::session_token(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_cache::memory::MemoryCacheProvider;

    fn make_store() -> SessionStore {
        SessionStore::new(
            Arc::new(MemoryCacheProvider::default()),
            &SessionConfig::default(),
        )
    }

    #[tokio::test]
    async fn issue_then_resolve() {
        let store = make_store();
        let user_id = Uuid::new_v4();

        let token = store.issue(user_id).await.unwrap();
        assert_eq!(store.resolve(&token).await.unwrap(), Some(user_id));
    }

    #[tokio::test]
    async fn distinct_logins_get_distinct_tokens() {
        let store = make_store();
        let user_id = Uuid::new_v4();

        let a = store.issue(user_id).await.unwrap();
        let b = store.issue(user_id).await.unwrap();
        assert_ne!(a, b);
        // Both remain valid.
        assert_eq!(store.resolve(&a).await.unwrap(), Some(user_id));
        assert_eq!(store.resolve(&b).await.unwrap(), Some(user_id));
    }

    #[tokio::test]
    async fn revoked_token_no_longer_resolves() {
        let store = make_store();
        let token = store.issue(Uuid::new_v4()).await.unwrap();

        store.revoke(&token).await.unwrap();
        assert_eq!(store.resolve(&token).await.unwrap(), None);
        // Revoking again is harmless.
        store.revoke(&token).await.unwrap();
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let store = make_store();
        assert_eq!(store.resolve("not-a-token").await.unwrap(), None);
    }
}
