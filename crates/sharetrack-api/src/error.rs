//! Maps domain `AppError` to HTTP responses.

use std::time::Duration;

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use sharetrack_core::error::{AppError, ErrorKind};

use crate::dto::response::ErrorResponse;

/// Returned for every failure the caller cannot act on. Never carries
/// implementation details.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to process share tracking request";

/// HTTP wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::RateLimit => StatusCode::TOO_MANY_REQUESTS,
            ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorKind::Internal | ErrorKind::Storage | ErrorKind::Configuration => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let retry_after = self.0.retry_after;

        let message = if self.0.kind.is_client_facing() {
            self.0.message
        } else {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Request failed");
            GENERIC_ERROR_MESSAGE.to_string()
        };

        let mut response = (status, Json(ErrorResponse::new(message))).into_response();
        if let Some(wait) = retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs(wait)));
        }
        response
    }
}

/// Whole seconds to wait, rounded up and never zero.
fn retry_after_secs(wait: Duration) -> u64 {
    let secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
    secs.max(1)
}
