//! User entity.

pub mod model;

pub use model::{NewUser, User};
