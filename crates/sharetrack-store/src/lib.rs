//! # sharetrack-store
//!
//! Backends for the storage traits in `sharetrack-core`.
//!
//! - **memory**: process-local event store ([dashmap](https://crates.io/crates/dashmap))
//!   and fixed-window rate limiter (Tokio mutex). State does not survive a
//!   restart and is not shared between instances.

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "memory")]
pub use memory::{MemoryEventStore, MemoryRateLimiter};
