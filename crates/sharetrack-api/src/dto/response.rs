//! Response DTOs.

use serde::{Deserialize, Serialize};

use sharetrack_core::types::{ContentType, Platform, ShareEvent};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Creates a successful response with a message.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Caller-safe error message.
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error body.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Acknowledgement of a recorded share. The shared URL is not echoed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedShare {
    pub content_id: String,
    pub content_type: ContentType,
    pub platform: Platform,
    /// ISO-8601 record time.
    pub timestamp: String,
}

impl From<&ShareEvent> for TrackedShare {
    fn from(event: &ShareEvent) -> Self {
        Self {
            content_id: event.content_id.clone(),
            content_type: event.content_type,
            platform: event.platform,
            timestamp: event.timestamp_iso(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
}
