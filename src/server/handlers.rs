use crate::apps::Application;
use crate::config::Mode;
use crate::metrics;
use crate::server::error::ApiError;
use crate::server::AppState;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn, Level};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Applications visible to the caller identified by the trust header.
pub(crate) async fn list_apps(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Application>>, ApiError> {
    let config = state.portal.config();

    if tracing::enabled!(Level::DEBUG) {
        debug!("All request headers:");
        for (name, value) in headers.iter() {
            debug!("  {}: {:?}", name, value);
        }
    }

    // Group names are UTF-8 in practice; HeaderValue::to_str only takes ASCII.
    let header_value = headers
        .get(config.group_header.as_str())
        .map(|v| String::from_utf8_lossy(v.as_bytes()));
    debug!("{} header value: {:?}", config.group_header, header_value);

    let caller = state.portal.caller_groups(header_value.as_deref());
    if caller.is_empty() && config.mode == Mode::Cluster {
        warn!("No groups found in {} header", config.group_header);
    }

    info!("Apps request: user_groups={:?}", caller.as_slice());

    let started = Instant::now();
    match state.portal.visible_applications(&caller).await {
        Ok(listing) => {
            state
                .metrics
                .record_success(started.elapsed(), listing.discovered, listing.apps.len());
            Ok(Json(listing.apps))
        }
        Err(e) => {
            state.metrics.record_failure(started.elapsed());
            Err(e.into())
        }
    }
}

pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Liveness only; dependencies are not checked.
pub(crate) async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}

pub(crate) async fn metrics(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = metrics::render(&state.metrics)
        .map_err(|e| ApiError::internal(format!("failed to encode metrics: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, metrics::exporter::CONTENT_TYPE)], body))
}

pub(crate) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 - Page Not Found")
}
