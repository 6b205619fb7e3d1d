//! REST API for computing production plans.
//!
//! Provides two endpoints:
//! - `GET /`: usage hint
//! - `POST /productionplan`: dispatch a load across a posted fleet

mod handlers;
pub mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

/// Immutable application state shared across all request handlers.
///
/// Every request carries its own fleet and prices, so the only shared
/// data is configuration. Wrapped in `Arc`; no locks needed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Include the CO2 allowance price in gas marginal cost.
    pub include_co2: bool,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/productionplan", post(handlers::production_plan))
        .with_state(state)
}

/// Binds to the given address and serves the API until Ctrl-C.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
