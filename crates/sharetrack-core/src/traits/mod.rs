//! Storage traits defined in `sharetrack-core` and implemented by
//! `sharetrack-store`.

pub mod event_store;
pub mod rate_limiter;

pub use event_store::EventStore;
pub use rate_limiter::{RateLimitDecision, RateLimiter};
