//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user.
///
/// Users are immutable after registration and are never deleted by
/// the core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address, unique across all users.
    pub email: String,
    /// One-way digest of the password.
    #[serde(skip_serializing)]
    pub password_digest: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Email address.
    pub email: String,
    /// Pre-digested password.
    pub password_digest: String,
}
