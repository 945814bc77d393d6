//! # sharetrack-core
//!
//! Core crate for the share tracking service. Contains the domain types
//! (content types, platforms, share events, aggregate statistics), the
//! configuration schemas, the storage traits implemented by
//! `sharetrack-store`, and the unified error system.
//!
//! This crate has **no** internal dependencies on other sharetrack crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
