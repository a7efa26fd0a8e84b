//! Domain types for Shopify Admin API responses.
//!
//! These are the shapes the rest of the app works with; the generated
//! `graphql_client` types never leave the `admin` module.

use std::fmt;

use merchant_tools_core::{FulfillmentGid, FulfillmentOrderGid, FulfillmentStatus, OrderGid};
use serde::{Deserialize, Serialize};

/// An order with the fields the fulfillment tool needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Global ID (`gid://shopify/Order/<n>`).
    pub id: OrderGid,
    /// Display name, e.g. `#1001`.
    pub name: String,
    /// Display fulfillment status.
    pub fulfillment_status: FulfillmentStatus,
    /// Fulfillment orders in the order Shopify returned them.
    pub fulfillment_order_ids: Vec<FulfillmentOrderGid>,
}

impl Order {
    /// The first fulfillment order, which is the one the tool fulfills.
    #[must_use]
    pub fn first_fulfillment_order(&self) -> Option<&FulfillmentOrderGid> {
        self.fulfillment_order_ids.first()
    }
}

/// A fulfillment created by `fulfillmentCreate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedFulfillment {
    pub id: FulfillmentGid,
    /// Fulfillment status, e.g. `SUCCESS`.
    pub status: String,
}

/// A user error returned by a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// Path to the offending input field (may be empty).
    pub field: Vec<String>,
    pub message: String,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.field.join("."), self.message)
        }
    }
}
