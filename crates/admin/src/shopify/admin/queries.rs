//! GraphQL query definitions for Shopify Admin API.
//!
//! Uses `graphql_client` to generate type-safe Rust code from GraphQL queries.
//! The schema is a vendored subset covering only what these operations touch.

use graphql_client::GraphQLQuery;

// =============================================================================
// Order queries
// =============================================================================

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/admin/schema.graphql",
    query_path = "graphql/admin/queries/orders.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetOrder;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/admin/schema.graphql",
    query_path = "graphql/admin/queries/orders.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetOrders;

// =============================================================================
// Fulfillment mutations
// =============================================================================

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/admin/schema.graphql",
    query_path = "graphql/admin/queries/fulfillment.graphql",
    response_derives = "Debug, Clone",
    variables_derives = "Debug, Clone"
)]
pub struct FulfillmentCreate;

// =============================================================================
// Shop queries
// =============================================================================

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/admin/schema.graphql",
    query_path = "graphql/admin/queries/shop.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetShopDomain;
