//! JSON API for the tools.
//!
//! Same workflows as the HTML pages, returning [`ActionData`] as JSON so
//! scripted callers (and `fetch` from the embedded pages) can use them.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::error::AppError;
use crate::routes::extract::FormData;
use crate::routes::fulfillment::FulfillmentForm;
use crate::routes::multipass::MultipassForm;
use crate::services::{ActionData, FulfillmentService, OrderRow, generate_login_url};
use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(orders))
        .route("/api/fulfillment", post(fulfillment))
        .route("/api/multipass", post(multipass))
}

/// GET /api/orders
async fn orders(State(state): State<AppState>) -> Result<Json<Vec<OrderRow>>, AppError> {
    let service = FulfillmentService::new(state.shopify(), state.messages());
    Ok(Json(service.list_orders().await?))
}

/// POST /api/fulfillment
///
/// Workflow failures (unknown order, wrong status, rejected) are a 200 with
/// `errorMessage`; only the order ID decides the outcome.
async fn fulfillment(
    State(state): State<AppState>,
    FormData(form): FormData<FulfillmentForm>,
) -> Json<ActionData> {
    let service = FulfillmentService::new(state.shopify(), state.messages());
    Json(service.submit(&form.order_id).await)
}

/// POST /api/multipass
async fn multipass(
    State(state): State<AppState>,
    FormData(form): FormData<MultipassForm>,
) -> Result<Json<ActionData>, AppError> {
    let login = generate_login_url(state.shopify(), &form.secret_key, &form.mail_address).await?;
    Ok(Json(login.into()))
}
