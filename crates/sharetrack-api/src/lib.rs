//! # sharetrack-api
//!
//! HTTP layer for the share tracking service: router, handlers, DTOs,
//! client identity extraction, error mapping, and middleware.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
