//! # shelf-service
//!
//! Business logic for Shelf. Services sit between the HTTP layer and
//! the stores and own all validation and access rules.

pub mod file;
pub mod user;

pub use file::FileService;
pub use user::UserService;
