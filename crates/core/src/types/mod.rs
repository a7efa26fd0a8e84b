//! Core types for Merchant Tools.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod form;
pub mod id;
pub mod locale;
pub mod status;

pub use form::FormState;
pub use id::{FulfillmentGid, FulfillmentOrderGid, OrderGid, legacy_id};
pub use locale::{Locale, UnsupportedLocale};
pub use status::FulfillmentStatus;
