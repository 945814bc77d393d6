//! In-memory backends for single-node deployments.

pub mod event_store;
pub mod rate_limiter;

pub use event_store::MemoryEventStore;
pub use rate_limiter::MemoryRateLimiter;
