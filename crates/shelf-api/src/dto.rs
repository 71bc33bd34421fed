//! Response shapes for the public API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shelf_entity::user::User;

/// Public view of a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Body returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Liveness of the two backing stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub redis: bool,
    pub db: bool,
}

/// Row counts across the instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub users: u64,
    pub files: u64,
}
