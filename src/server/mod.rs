//! HTTP surface of the portal
//!
//! - `GET /api/apps` - applications visible to the caller
//! - `GET /health`   - liveness probe
//! - `GET /metrics`  - Prometheus metrics
//! - anything else   - files from the static asset directory

pub mod error;
mod handlers;

use crate::metrics::PortalMetrics;
use crate::portal::Portal;
use crate::Result;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use error::ApiError;

/// State shared by all handlers
pub struct AppState {
    pub portal: Portal,
    pub metrics: PortalMetrics,
}

impl AppState {
    pub fn new(portal: Portal, metrics: PortalMetrics) -> Self {
        Self { portal, metrics }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.portal.config().static_dir)
        .not_found_service(handlers::not_found.into_service());

    Router::new()
        .route(
            "/api/apps",
            get(handlers::list_apps).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl-C or SIGTERM.
pub async fn serve(state: Arc<AppState>) -> Result<()> {
    let config = state.portal.config();
    let addr = config.listen_addr;

    info!(
        "Starting portal server on {} (mode={}, source={})",
        addr,
        config.mode,
        state.portal.source_name()
    );

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Portal server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received");
}
