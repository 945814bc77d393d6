//! Route definitions for the share tracking HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{Router, extract::DefaultBodyLimit, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes. Cross-cutting layers are added by
/// [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.tracking.max_body_bytes;

    let api_routes = Router::new()
        .merge(tracking_routes(max_body))
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Share event recording and statistics
fn tracking_routes(max_body: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/social/track-share",
            get(handlers::tracking::get_share_stats).post(handlers::tracking::track_share),
        )
        .layer(DefaultBodyLimit::max(max_body))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
