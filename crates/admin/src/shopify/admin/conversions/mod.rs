//! Type conversions from GraphQL response types to domain types.
//!
//! These functions convert the generated `graphql_client` types
//! into our clean domain types.

mod fulfillment;
mod orders;

pub use fulfillment::convert_created_fulfillment;
pub use orders::{convert_order, convert_order_list};
