//! # shelf-api
//!
//! HTTP surface for Shelf, built on Axum. Handlers stay thin; every
//! rule lives in `shelf-service` and below.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
