//! In-memory user store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use shelf_core::error::AppError;
use shelf_core::result::AppResult;
use shelf_entity::user::{NewUser, User};

use crate::store::UserStore;

/// In-memory user store. Rows keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    rows: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|u| u.email == user.email) {
            return Err(AppError::conflict("Already exists"));
        }
        let stored = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_digest: user.password_digest,
            created_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.rows.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
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

    #[tokio::test]
    async fn insert_and_find() {
        let store = MemoryUserStore::new();
        let user = store
            .insert(NewUser {
                email: "bob@dylan.com".into(),
                password_digest: "digest".into(),
            })
            .await
            .unwrap();

        assert_eq!(
            store.find_by_id(user.id).await.unwrap().map(|u| u.email),
            Some("bob@dylan.com".to_string())
        );
        assert!(
            store
                .find_by_email("bob@dylan.com")
                .await
                .unwrap()
                .is_some()
        );
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryUserStore::new();
        let new = |digest: &str| NewUser {
            email: "bob@dylan.com".into(),
            password_digest: digest.into(),
        };
        store.insert(new("a")).await.unwrap();
        let err = store.insert(new("b")).await.unwrap_err();
        assert_eq!(err.message, "Already exists");
    }
}
