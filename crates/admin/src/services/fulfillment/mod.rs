//! Order fulfillment workflow.
//!
//! Moves a single order from UNFULFILLED to FULFILLED by fulfilling its first
//! fulfillment order, and lists recent orders so the merchant can find IDs.

mod error;

pub use error::FulfillmentError;

use serde::Serialize;
use tracing::instrument;

use merchant_tools_core::{FulfillmentOrderGid, FulfillmentStatus, OrderGid, legacy_id};

use crate::i18n::Messages;
use crate::services::ActionData;
use crate::shopify::{AdminApi, AdminShopifyError, CreatedFulfillment, MAX_RECENT_ORDERS, Order};

/// A successfully fulfilled order.
#[derive(Debug, Clone)]
pub struct FulfilledOrder {
    pub order_id: OrderGid,
    pub fulfillment_order_id: FulfillmentOrderGid,
    pub fulfillment: CreatedFulfillment,
}

/// One row of the order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    /// Numeric part of the order ID, the value merchants type in.
    pub order_id: String,
    pub name: String,
    pub status: FulfillmentStatus,
    /// Localized status label.
    pub status_label: String,
    pub fulfillment_order_ids: Vec<FulfillmentOrderGid>,
}

impl OrderRow {
    fn from_order(order: Order, messages: &Messages) -> Self {
        Self {
            order_id: order.id.legacy_id().to_string(),
            name: order.name,
            status_label: order.fulfillment_status.label(messages.locale).into_owned(),
            status: order.fulfillment_status,
            fulfillment_order_ids: order.fulfillment_order_ids,
        }
    }
}

/// Fulfillment workflow bound to an authorized Admin API client.
pub struct FulfillmentService<'a, A> {
    api: &'a A,
    messages: &'static Messages,
}

impl<'a, A: AdminApi> FulfillmentService<'a, A> {
    /// Create a fulfillment service.
    #[must_use]
    pub const fn new(api: &'a A, messages: &'static Messages) -> Self {
        Self { api, messages }
    }

    /// Mark an order fulfilled.
    ///
    /// `raw_order_id` is the numeric order ID as the merchant typed it; it is
    /// turned into a global ID without validation.
    ///
    /// # Errors
    ///
    /// - [`FulfillmentError::NotFound`] if no order has this ID
    /// - [`FulfillmentError::InvalidState`] unless the order is UNFULFILLED
    /// - [`FulfillmentError::NoFulfillmentOrder`] if there is nothing to fulfill
    /// - [`FulfillmentError::Rejected`] if Shopify returns user errors
    /// - [`FulfillmentError::Remote`] if an Admin API call fails
    #[instrument(skip(self))]
    pub async fn fulfill_order(&self, raw_order_id: &str) -> Result<FulfilledOrder, FulfillmentError> {
        let order_id = OrderGid::from_legacy(raw_order_id);

        let Some(order) = self.api.order(&order_id).await? else {
            return Err(FulfillmentError::NotFound {
                order_id: raw_order_id.to_string(),
            });
        };

        if !order.fulfillment_status.is_unfulfilled() {
            return Err(FulfillmentError::InvalidState {
                order_id: raw_order_id.to_string(),
                status: order.fulfillment_status,
            });
        }

        let Some(fulfillment_order_id) = order.first_fulfillment_order().cloned() else {
            return Err(FulfillmentError::NoFulfillmentOrder {
                order_id: raw_order_id.to_string(),
            });
        };

        let fulfillment = self.api.fulfill(&fulfillment_order_id).await?;

        tracing::info!(
            order_id = %order_id,
            fulfillment_id = %fulfillment.id,
            "Order fulfilled"
        );

        Ok(FulfilledOrder {
            order_id,
            fulfillment_order_id,
            fulfillment,
        })
    }

    /// Run [`fulfill_order`](Self::fulfill_order) and turn the outcome into
    /// the message shown to the merchant.
    pub async fn submit(&self, raw_order_id: &str) -> ActionData {
        match self.fulfill_order(raw_order_id).await {
            Ok(_) => ActionData::message(self.messages.update_complete(legacy_id(raw_order_id))),
            Err(err) => {
                match &err {
                    FulfillmentError::Remote(_) | FulfillmentError::Rejected(_) => {
                        tracing::warn!(error = %err, "Fulfillment failed");
                    }
                    _ => tracing::info!(error = %err, "Fulfillment refused"),
                }
                err.to_action_data(self.messages)
            }
        }
    }

    /// The newest orders with localized status labels, at most
    /// [`MAX_RECENT_ORDERS`].
    ///
    /// # Errors
    ///
    /// Returns an error if the Admin API call fails.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<OrderRow>, AdminShopifyError> {
        let orders = self.api.recent_orders(MAX_RECENT_ORDERS).await?;

        Ok(orders
            .into_iter()
            .take(MAX_RECENT_ORDERS)
            .map(|order| OrderRow::from_order(order, self.messages))
            .collect())
    }
}
