//! # shelf-entity
//!
//! Domain entity models for Shelf: users and file records.

pub mod file;
pub mod user;

pub use file::{FileKind, FileRecord, NewFileRecord};
pub use user::{NewUser, User};
