//! Social share tracking handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use sharetrack_core::error::AppError;
use sharetrack_core::types::ShareStats;
use sharetrack_service::validation::{INVALID_JSON, INVALID_STATS_QUERY};

use crate::dto::request::StatsQuery;
use crate::dto::response::{ApiResponse, TrackedShare};
use crate::error::ApiError;
use crate::extractors::ClientKey;
use crate::state::AppState;

/// Success message for a recorded share.
pub const TRACKED_MESSAGE: &str = "Share event tracked successfully";

/// Body exceeded `tracking.max_body_bytes`.
pub const BODY_TOO_LARGE: &str = "Request body too large";

/// Writes left in the caller's current rate limit window.
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// POST /api/social/track-share
///
/// The body is taken as raw bytes so that malformed JSON maps to the
/// service's own validation error instead of an extractor rejection.
pub async fn track_share(
    State(state): State<AppState>,
    client: ClientKey,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = body.map_err(body_error)?;
    let recorded = state.tracking.record_share(&body, client.as_str()).await?;

    Ok((
        [(RATE_LIMIT_REMAINING, recorded.remaining.to_string())],
        Json(ApiResponse::with_message(
            TRACKED_MESSAGE,
            TrackedShare::from(&recorded.event),
        )),
    ))
}

/// Maps a body read failure onto the JSON error envelope.
fn body_error(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(BODY_TOO_LARGE)
    } else {
        AppError::validation(INVALID_JSON)
    }
}

/// GET /api/social/track-share?contentId=&contentType=
pub async fn get_share_stats(
    State(state): State<AppState>,
    query: Result<Query<StatsQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<ShareStats>>, ApiError> {
    let Query(query) = query.map_err(|_| AppError::validation(INVALID_STATS_QUERY))?;

    let stats = state
        .tracking
        .get_stats(query.content_id.as_deref(), query.content_type.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(stats)))
}
