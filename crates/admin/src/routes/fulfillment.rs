//! Fulfillment tool pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use merchant_tools_core::FormState;

use crate::error::AppError;
use crate::i18n::Messages;
use crate::routes::ActionView;
use crate::routes::extract::FormData;
use crate::services::{FulfillmentService, OrderRow};
use crate::state::AppState;

/// Build the fulfillment router.
pub fn router() -> Router<AppState> {
    Router::new().route("/app/fulfillment", get(show).post(update))
}

/// Input of the fulfillment form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentForm {
    #[serde(default, rename = "orderId")]
    pub order_id: String,
}

/// Fulfillment page template.
#[derive(Template, WebTemplate)]
#[template(path = "fulfillment.html")]
struct FulfillmentTemplate {
    m: &'static Messages,
    form: FormState<FulfillmentForm>,
    action: ActionView,
    orders: Vec<OrderRow>,
}

/// GET /app/fulfillment
async fn show(State(state): State<AppState>) -> Result<FulfillmentTemplate, AppError> {
    let service = FulfillmentService::new(state.shopify(), state.messages());
    let orders = service.list_orders().await?;

    Ok(FulfillmentTemplate {
        m: state.messages(),
        form: FormState::default(),
        action: ActionView::default(),
        orders,
    })
}

/// POST /app/fulfillment
///
/// The order list is reloaded after the action so it shows the new status.
/// A failed reload leaves the table empty; the action result is still shown.
async fn update(
    State(state): State<AppState>,
    FormData(input): FormData<FulfillmentForm>,
) -> FulfillmentTemplate {
    let mut form: FormState<FulfillmentForm> = FormState::default();
    form.edit(input);
    let submitted = form.save();

    let service = FulfillmentService::new(state.shopify(), state.messages());
    let action = service.submit(&submitted.order_id).await;
    let orders = service.list_orders().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Order list reload failed");
        Vec::new()
    });

    FulfillmentTemplate {
        m: state.messages(),
        form,
        action: ActionView::from(&action),
        orders,
    }
}
