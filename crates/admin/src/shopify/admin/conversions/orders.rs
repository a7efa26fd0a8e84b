//! Order type conversion functions.

use merchant_tools_core::{FulfillmentOrderGid, FulfillmentStatus, OrderGid};

use crate::shopify::types::Order;

use super::super::queries::{get_order, get_orders};

/// Map a generated `OrderDisplayFulfillmentStatus` onto [`FulfillmentStatus`].
///
/// Each query module gets its own copy of the generated enum, so this is a
/// macro rather than a function.
macro_rules! convert_display_status {
    ($module:ident, $value:expr) => {{
        use $module::OrderDisplayFulfillmentStatus as Status;
        match $value {
            Status::FULFILLED => FulfillmentStatus::Fulfilled,
            Status::UNFULFILLED => FulfillmentStatus::Unfulfilled,
            Status::ON_HOLD => FulfillmentStatus::OnHold,
            Status::SCHEDULED => FulfillmentStatus::Scheduled,
            Status::PARTIALLY_FULFILLED => FulfillmentStatus::PartiallyFulfilled,
            Status::IN_PROGRESS => FulfillmentStatus::Other("IN_PROGRESS".to_string()),
            Status::OPEN => FulfillmentStatus::Other("OPEN".to_string()),
            Status::PENDING_FULFILLMENT => {
                FulfillmentStatus::Other("PENDING_FULFILLMENT".to_string())
            }
            Status::REQUEST_DECLINED => FulfillmentStatus::Other("REQUEST_DECLINED".to_string()),
            Status::RESTOCKED => FulfillmentStatus::Other("RESTOCKED".to_string()),
            Status::Other(value) => FulfillmentStatus::Other(value),
        }
    }};
}

// =============================================================================
// GetOrder conversions
// =============================================================================

pub fn convert_order(order: get_order::GetOrderOrder) -> Order {
    Order {
        id: OrderGid::new(order.id),
        name: order.name,
        fulfillment_status: convert_display_status!(get_order, order.display_fulfillment_status),
        fulfillment_order_ids: order
            .fulfillment_orders
            .edges
            .into_iter()
            .map(|edge| FulfillmentOrderGid::new(edge.node.id))
            .collect(),
    }
}

// =============================================================================
// GetOrders conversions
// =============================================================================

pub fn convert_order_list(orders: get_orders::GetOrdersOrders) -> Vec<Order> {
    orders
        .edges
        .into_iter()
        .map(|edge| {
            let node = edge.node;
            Order {
                id: OrderGid::new(node.id),
                name: node.name,
                fulfillment_status: convert_display_status!(
                    get_orders,
                    node.display_fulfillment_status
                ),
                fulfillment_order_ids: node
                    .fulfillment_orders
                    .edges
                    .into_iter()
                    .map(|fo| FulfillmentOrderGid::new(fo.node.id))
                    .collect(),
            }
        })
        .collect()
}
