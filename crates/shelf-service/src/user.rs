//! User account operations.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use shelf_auth::PasswordHasher;
use shelf_core::error::AppError;
use shelf_core::result::AppResult;
use shelf_database::UserStore;
use shelf_entity::user::{NewUser, User};

/// Registration payload. Both fields are required; the error message
/// names whichever is absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Handles registration and profile lookups.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
        }
    }

    /// Register a new account. The plaintext password is digested
    /// before anything is stored.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let email = match request.email.as_deref() {
            Some(e) if !e.is_empty() => e,
            _ => return Err(AppError::validation("Missing email")),
        };
        let password = match request.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return Err(AppError::validation("Missing password")),
        };

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Already exists"));
        }

        let user = self
            .users
            .insert(NewUser {
                email: email.to_string(),
                password_digest: self.hasher.hash_password(password)?,
            })
            .await?;

        info!(user_id = %user.id, "Registered new user");
        Ok(user)
    }

    /// Load the profile behind a resolved session. A dangling session
    /// (user row gone) reads as an auth failure, not a missing page.
    pub async fn profile(&self, user_id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }

    /// Total number of registered users.
    pub async fn count(&self) -> AppResult<u64> {
        self.users.count().await
    }

    /// Whether the backing user store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.users.health_check().await
    }
}
