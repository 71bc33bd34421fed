//! # shelf-database
//!
//! Persistence layer for Shelf. Defines the [`UserStore`] and
//! [`FileStore`] traits and ships a Postgres implementation plus an
//! in-memory one for tests.

#[cfg(feature = "postgres-backend")]
pub mod connection;
#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "postgres-backend")]
pub mod postgres;
pub mod store;

#[cfg(feature = "postgres-backend")]
pub use connection::DatabasePool;
pub use store::{FileStore, UserStore};
