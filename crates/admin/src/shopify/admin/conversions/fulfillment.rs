//! Fulfillment type conversion functions.

use merchant_tools_core::FulfillmentGid;

use crate::shopify::types::CreatedFulfillment;

use super::super::queries::fulfillment_create;

pub fn convert_created_fulfillment(
    fulfillment: fulfillment_create::FulfillmentCreateFulfillmentCreateFulfillment,
) -> CreatedFulfillment {
    use fulfillment_create::FulfillmentStatus as Status;

    let status = match fulfillment.status {
        Status::SUCCESS => "SUCCESS".to_string(),
        Status::CANCELLED => "CANCELLED".to_string(),
        Status::ERROR => "ERROR".to_string(),
        Status::FAILURE => "FAILURE".to_string(),
        Status::Other(value) => value,
    };

    CreatedFulfillment {
        id: FulfillmentGid::new(fulfillment.id),
        status,
    }
}
