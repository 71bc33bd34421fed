//! # shelf-storage
//!
//! Blob storage for Shelf. The local filesystem provider stores each
//! blob under an opaque name; metadata lives elsewhere.

pub mod local;
pub mod mime;

pub use local::LocalBlobStore;
