//! # shelf-auth
//!
//! Credential verification and session token management for Shelf.

pub mod credentials;
pub mod password;
pub mod session;

pub use credentials::CredentialVerifier;
pub use password::PasswordHasher;
pub use session::SessionStore;
