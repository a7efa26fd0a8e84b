//! Shopify Admin API GraphQL client.
//!
//! This module provides a type-safe client for interacting with the
//! Shopify Admin API using GraphQL. Requests are authorized with the
//! store's Admin API access token.

use std::sync::Arc;

use graphql_client::GraphQLQuery;
use merchant_tools_core::{FulfillmentOrderGid, OrderGid};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};

use crate::config::ShopifyAdminConfig;

use super::{
    AdminApi, AdminShopifyError, GraphQLError, GraphQLErrorLocation,
    types::{CreatedFulfillment, Order},
};

mod conversions;
mod fulfillment;
mod orders;
pub mod queries;
mod shop;

pub use orders::MAX_RECENT_ORDERS;

/// Header carrying the Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Shopify Admin API GraphQL client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    store: String,
    endpoint: String,
    access_token: SecretString,
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    locations: Vec<GraphQLErrorLocationResponse>,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorLocationResponse {
    line: i64,
    column: i64,
}

impl AdminClient {
    /// Create a new Admin API client.
    ///
    /// # Arguments
    ///
    /// * `config` - Shopify Admin API configuration
    #[must_use]
    pub fn new(config: &ShopifyAdminConfig) -> Self {
        let client = reqwest::Client::new();

        Self {
            inner: Arc::new(AdminClientInner {
                client,
                store: config.store.clone(),
                endpoint: config.graphql_endpoint(),
                access_token: config.access_token.clone(),
            }),
        }
    }

    // =========================================================================
    // GraphQL Execution
    // =========================================================================

    /// Execute a GraphQL query.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, AdminShopifyError>
    where
        Q::ResponseData: DeserializeOwned,
    {
        let body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header(ACCESS_TOKEN_HEADER, self.inner.access_token.expose_secret())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        // Check for rate limiting
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            tracing::warn!(store = %self.inner.store, retry_after, "Admin API rate limited");
            return Err(AdminShopifyError::RateLimited(retry_after));
        }

        // Check for unauthorized
        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::FORBIDDEN
        {
            tracing::warn!(
                store = %self.inner.store,
                status = %response.status(),
                "Admin API refused access token"
            );
            return Err(AdminShopifyError::Unauthorized(
                "Invalid access token or missing API scope".to_string(),
            ));
        }

        let response = response.error_for_status()?;
        let graphql_response: GraphQLResponse<Q::ResponseData> = response.json().await?;

        // Check for GraphQL errors
        if let Some(errors) = graphql_response.errors
            && !errors.is_empty()
        {
            let converted_errors: Vec<GraphQLError> = errors
                .into_iter()
                .map(|e| GraphQLError {
                    message: e.message,
                    locations: e
                        .locations
                        .into_iter()
                        .map(|l| GraphQLErrorLocation {
                            line: l.line,
                            column: l.column,
                        })
                        .collect(),
                    path: e.path,
                })
                .collect();
            return Err(AdminShopifyError::GraphQL(converted_errors));
        }

        graphql_response.data.ok_or_else(|| {
            AdminShopifyError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }
}

impl AdminApi for AdminClient {
    async fn order(&self, id: &OrderGid) -> Result<Option<Order>, AdminShopifyError> {
        self.get_order(id).await
    }

    async fn recent_orders(&self, first: usize) -> Result<Vec<Order>, AdminShopifyError> {
        self.get_recent_orders(first).await
    }

    async fn fulfill(
        &self,
        fulfillment_order_id: &FulfillmentOrderGid,
    ) -> Result<CreatedFulfillment, AdminShopifyError> {
        self.create_fulfillment(fulfillment_order_id).await
    }

    async fn shop_domain(&self) -> Result<String, AdminShopifyError> {
        self.get_shop_domain().await
    }
}
