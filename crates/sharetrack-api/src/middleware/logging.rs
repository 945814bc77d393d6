//! Access log keyed by the rate limit identity.

use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

use crate::extractors::ClientKey;

/// Logs every request with the client key the limiter sees and how the
/// request ended.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let client = ClientKey::from_headers(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let outcome = outcome(status);
    let duration_ms = start.elapsed().as_millis() as u64;

    match status {
        StatusCode::TOO_MANY_REQUESTS => warn!(
            client = %client.as_str(),
            method = %method,
            path = %path,
            outcome,
            duration_ms,
            "Client throttled"
        ),
        s if s.is_server_error() => error!(
            client = %client.as_str(),
            method = %method,
            path = %path,
            status = s.as_u16(),
            outcome,
            duration_ms,
            "Request failed"
        ),
        s => info!(
            client = %client.as_str(),
            method = %method,
            path = %path,
            status = s.as_u16(),
            outcome,
            duration_ms,
            "Request handled"
        ),
    }

    response
}

/// Short label for the response status.
fn outcome(status: StatusCode) -> &'static str {
    match status {
        StatusCode::TOO_MANY_REQUESTS => "rate_limited",
        StatusCode::PAYLOAD_TOO_LARGE => "too_large",
        s if s.is_success() => "ok",
        s if s.is_client_error() => "rejected",
        _ => "failed",
    }
}
