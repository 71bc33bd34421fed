//! Shared result alias.

use crate::error::AppError;

/// Result alias used across all Shelf crates.
pub type AppResult<T> = Result<T, AppError>;
