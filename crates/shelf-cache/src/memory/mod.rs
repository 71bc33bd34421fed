//! In-memory TTL store provider.

pub mod store;

pub use store::MemoryCacheProvider;
