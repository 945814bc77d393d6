//! # sharetrack-service
//!
//! Business logic for the share tracking endpoint. The service only talks
//! to the [`EventStore`](sharetrack_core::traits::EventStore) and
//! [`RateLimiter`](sharetrack_core::traits::RateLimiter) traits, so storage
//! backends can be swapped without touching validation or responses.

pub mod pruner;
pub mod service;
pub mod validation;

pub use pruner::WindowPruner;
pub use service::{RecordedShare, ShareTrackingService};
