//! # shelf-core
//!
//! Core crate for Shelf. Contains provider traits, configuration
//! schemas, shared types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Shelf crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
