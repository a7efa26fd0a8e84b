//! Fulfillment creation for the Admin API.

use tracing::instrument;

use merchant_tools_core::FulfillmentOrderGid;

use super::{
    AdminClient, AdminShopifyError, GraphQLError, conversions::convert_created_fulfillment,
    queries::FulfillmentCreate,
};
use crate::shopify::types::{CreatedFulfillment, UserError};

impl AdminClient {
    /// Create a fulfillment covering every remaining line item of a
    /// fulfillment order.
    ///
    /// No tracking information is attached and the customer is not notified.
    ///
    /// # Arguments
    ///
    /// * `fulfillment_order_id` - Fulfillment order ID to fulfill
    ///
    /// # Errors
    ///
    /// Returns [`AdminShopifyError::UserErrors`] if Shopify rejects the
    /// mutation, or another error if the API request fails.
    #[instrument(skip(self), fields(fulfillment_order_id = %fulfillment_order_id))]
    pub async fn create_fulfillment(
        &self,
        fulfillment_order_id: &FulfillmentOrderGid,
    ) -> Result<CreatedFulfillment, AdminShopifyError> {
        use super::queries::fulfillment_create::{
            FulfillmentInput, FulfillmentOrderLineItemsInput, Variables,
        };

        let variables = Variables {
            fulfillment: FulfillmentInput {
                line_items_by_fulfillment_order: vec![FulfillmentOrderLineItemsInput {
                    fulfillment_order_id: fulfillment_order_id.as_str().to_string(),
                    fulfillment_order_line_items: None,
                }],
                notify_customer: None,
                tracking_info: None,
            },
        };

        let response = self.execute::<FulfillmentCreate>(variables).await?;

        if let Some(payload) = response.fulfillment_create {
            if !payload.user_errors.is_empty() {
                let errors = payload
                    .user_errors
                    .into_iter()
                    .map(|e| UserError {
                        field: e.field.unwrap_or_default(),
                        message: e.message,
                    })
                    .collect();
                return Err(AdminShopifyError::UserErrors(errors));
            }

            if let Some(fulfillment) = payload.fulfillment {
                return Ok(convert_created_fulfillment(fulfillment));
            }
        }

        Err(AdminShopifyError::GraphQL(vec![GraphQLError {
            message: "No fulfillment returned from create".to_string(),
            locations: vec![],
            path: vec![],
        }]))
    }
}
