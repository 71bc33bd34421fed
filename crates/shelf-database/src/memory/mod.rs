//! In-memory store implementations for tests and local runs.

pub mod file;
pub mod user;

pub use file::MemoryFileStore;
pub use user::MemoryUserStore;
