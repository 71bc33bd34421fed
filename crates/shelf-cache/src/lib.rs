//! # shelf-cache
//!
//! TTL-keyed lookup providers for Shelf, behind the
//! [`CacheProvider`](shelf_core::traits::CacheProvider) trait.
//! Sessions are the primary tenant.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
