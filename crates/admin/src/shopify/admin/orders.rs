//! Order lookups for the Admin API.

use tracing::instrument;

use merchant_tools_core::OrderGid;

use super::{
    AdminClient, AdminShopifyError,
    conversions::{convert_order, convert_order_list},
    queries::{GetOrder, GetOrders},
};
use crate::shopify::types::Order;

/// Largest page the order list ever requests.
pub const MAX_RECENT_ORDERS: usize = 20;

impl AdminClient {
    /// Get an order by ID along with its first fulfillment order.
    ///
    /// # Arguments
    ///
    /// * `id` - Shopify order ID (e.g., `gid://shopify/Order/123`)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: &OrderGid) -> Result<Option<Order>, AdminShopifyError> {
        let variables = super::queries::get_order::Variables {
            id: id.as_str().to_string(),
        };

        let response = self.execute::<GetOrder>(variables).await?;

        Ok(response.order.map(convert_order))
    }

    /// Get the newest orders, sorted by creation date descending.
    ///
    /// `first` is capped at [`MAX_RECENT_ORDERS`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn get_recent_orders(&self, first: usize) -> Result<Vec<Order>, AdminShopifyError> {
        let first = first.min(MAX_RECENT_ORDERS);
        let variables = super::queries::get_orders::Variables {
            first: i64::try_from(first).unwrap_or(20),
        };

        let response = self.execute::<GetOrders>(variables).await?;

        Ok(convert_order_list(response.orders))
    }
}
