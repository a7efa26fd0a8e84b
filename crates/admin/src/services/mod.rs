//! Business logic services for admin.
//!
//! # Services
//!
//! - `fulfillment` - Mark an order fulfilled; list recent orders
//! - `multipass` - Storefront login URLs for customers

pub mod action;
pub mod fulfillment;
pub mod multipass;

pub use action::ActionData;
pub use fulfillment::{FulfilledOrder, FulfillmentError, FulfillmentService, OrderRow};
pub use multipass::{LoginUrl, LoginUrlError, generate_login_url};
