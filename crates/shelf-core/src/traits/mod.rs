//! Provider traits implemented by the infrastructure crates.

pub mod blob;
pub mod cache;

pub use blob::BlobStore;
pub use cache::CacheProvider;
