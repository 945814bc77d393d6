//! Application builder: wires router, middleware and state into an Axum app.

use axum::Router;
use axum::middleware as axum_middleware;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

use sharetrack_core::config::AppConfig;
use sharetrack_core::error::AppError;
use sharetrack_service::WindowPruner;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the share tracking server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting share tracking server...");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let prune_interval = config.tracking.rate_limit.prune_interval();
    let state = AppState::new(config);

    tracing::info!(
        max_requests = state.config.tracking.rate_limit.max_requests,
        window_secs = state.config.tracking.rate_limit.window_seconds,
        "In-memory event store and rate limiter initialized"
    );

    // ── Background maintenance ───────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let pruner_handle = WindowPruner::new(state.limiter.clone(), prune_interval).spawn(shutdown_rx);

    // ── HTTP server ──────────────────────────────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Share tracking server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Err(e) = pruner_handle.await {
        tracing::warn!(error = %e, "Rate limit pruner exited abnormally");
    }

    tracing::info!("Share tracking server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
