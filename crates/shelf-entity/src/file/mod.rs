//! File record entity.

pub mod kind;
pub mod model;

pub use kind::FileKind;
pub use model::{FileRecord, NewFileRecord};
