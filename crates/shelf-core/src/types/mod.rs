//! Shared domain types.

pub mod pagination;
pub mod parent;

pub use pagination::{PAGE_SIZE, Page};
pub use parent::ParentId;
