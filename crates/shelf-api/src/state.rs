//! Application state shared across all handlers.

use std::sync::Arc;

use shelf_auth::{CredentialVerifier, SessionStore};
use shelf_cache::CacheManager;
use shelf_core::config::AppConfig;
use shelf_service::{FileService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,
    /// Session token store
    pub sessions: Arc<SessionStore>,
    /// Login credential verifier
    pub credentials: Arc<CredentialVerifier>,
    /// User account operations
    pub users: Arc<UserService>,
    /// File and folder operations
    pub files: Arc<FileService>,
}
