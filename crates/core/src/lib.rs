//! Merchant Tools Core - Shared types library.
//!
//! This crate provides common types used by the Merchant Tools components:
//! - `admin` - Embedded admin app (fulfillment and multipass tools)
//! - `integration-tests` - HTTP-level tests against a fake Admin API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps it
//! lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shopify global IDs, fulfillment status labels, locale, form state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
