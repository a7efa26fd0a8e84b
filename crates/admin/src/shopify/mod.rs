//! Shopify Admin API client.
//!
//! # Security
//!
//! The client holds the store's Admin API access token. It can read orders
//! and create fulfillments, so the token must never reach the browser.
//!
//! # Architecture
//!
//! - Uses `graphql-client` crate for type-safe GraphQL queries
//! - Direct API calls to Shopify (no local database sync)
//! - Workflows depend on the [`AdminApi`] trait, not on [`AdminClient`]
//!   directly, so they can be exercised against an in-memory fake
//!
//! # Example
//!
//! ```rust,ignore
//! use merchant_tools_admin::shopify::AdminClient;
//! use merchant_tools_core::OrderGid;
//!
//! let client = AdminClient::new(&config.shopify);
//!
//! let order = client.get_order(&OrderGid::from_legacy("5414420775206")).await?;
//! let domain = client.get_shop_domain().await?;
//! ```

mod admin;
pub mod types;

use std::future::Future;

pub use admin::{AdminClient, MAX_RECENT_ORDERS};
pub use types::*;

use merchant_tools_core::{FulfillmentOrderGid, OrderGid};
use thiserror::Error;

/// Errors that can occur when interacting with Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A mutation was rejected with user errors (e.g., invalid input).
    #[error("User errors: {}", format_user_errors(.0))]
    UserErrors(Vec<UserError>),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(UserError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The Admin API operations the workflows need.
///
/// Implemented by [`AdminClient`] for real requests. Workflow functions take
/// `&impl AdminApi` so the authorized client is always passed explicitly.
pub trait AdminApi: Send + Sync {
    /// Fetch one order with its first fulfillment order, or `None` if no
    /// order has this ID.
    fn order(
        &self,
        id: &OrderGid,
    ) -> impl Future<Output = Result<Option<Order>, AdminShopifyError>> + Send;

    /// Fetch the newest orders, at most `first` of them.
    fn recent_orders(
        &self,
        first: usize,
    ) -> impl Future<Output = Result<Vec<Order>, AdminShopifyError>> + Send;

    /// Fulfill every remaining line item of a fulfillment order.
    fn fulfill(
        &self,
        fulfillment_order_id: &FulfillmentOrderGid,
    ) -> impl Future<Output = Result<CreatedFulfillment, AdminShopifyError>> + Send;

    /// The shop's canonical `.myshopify.com` domain.
    fn shop_domain(&self) -> impl Future<Output = Result<String, AdminShopifyError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQLError {
                message: "Field not found".to_string(),
                locations: vec![],
                path: vec![],
            },
            GraphQLError {
                message: "Invalid ID".to_string(),
                locations: vec![],
                path: vec![],
            },
        ];
        let err = AdminShopifyError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Invalid ID"
        );
    }

    #[test]
    fn test_rate_limited_error() {
        let err = AdminShopifyError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_unauthorized_error() {
        let err = AdminShopifyError::Unauthorized("Invalid token".to_string());
        assert_eq!(err.to_string(), "Unauthorized: Invalid token");
    }

    #[test]
    fn test_user_errors_formatting() {
        let err = AdminShopifyError::UserErrors(vec![
            UserError {
                field: vec!["fulfillment".to_string(), "lineItemsByFulfillmentOrder".to_string()],
                message: "Fulfillment order is closed".to_string(),
            },
            UserError {
                field: vec![],
                message: "Something else".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "User errors: fulfillment.lineItemsByFulfillmentOrder: Fulfillment order is closed; Something else"
        );
    }
}
