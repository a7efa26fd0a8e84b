//! Health check endpoints.

use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::shopify::AdminApi;
use crate::state::AppState;

/// Build the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the Admin API accepts the access token. Returns 503 Service
/// Unavailable if it does not.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.shopify().shop_domain().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Admin API not reachable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
