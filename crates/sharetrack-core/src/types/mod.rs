//! Domain types for share tracking.

pub mod content;
pub mod event;
pub mod platform;
pub mod stats;

pub use content::{ContentKey, ContentType};
pub use event::ShareEvent;
pub use platform::Platform;
pub use stats::{PlatformCounts, ShareStats};
