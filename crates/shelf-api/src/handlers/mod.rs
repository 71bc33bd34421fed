//! HTTP request handlers, grouped by domain.

pub mod auth;
pub mod files;
pub mod health;
pub mod users;
