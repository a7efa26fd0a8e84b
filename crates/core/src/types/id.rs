//! Newtype wrappers for Shopify global IDs.
//!
//! Shopify addresses every resource with a global ID of the form
//! `gid://shopify/<Type>/<number>`. Merchants only ever see the trailing
//! number, so each wrapper can be built from that "legacy" number and can
//! hand it back for display.
//!
//! Use the `define_gid!` macro to create type-safe wrappers that prevent
//! accidentally passing a fulfillment order ID where an order ID is expected.

/// Prefix shared by every Shopify global ID.
pub const GID_PREFIX: &str = "gid://shopify/";

/// Macro to define a type-safe Shopify global ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `from_legacy()` to build the GID from a bare number
/// - `legacy_id()` to get the trailing number back for display
///
/// # Example
///
/// ```rust
/// # use merchant_tools_core::define_gid;
/// define_gid!(ProductGid, "Product");
///
/// let id = ProductGid::from_legacy("42");
/// assert_eq!(id.as_str(), "gid://shopify/Product/42");
/// assert_eq!(id.legacy_id(), "42");
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident, $resource:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Shopify resource type name used in the GID path.
            pub const RESOURCE: &'static str = $resource;

            /// Wrap a full global ID string without validation.
            #[must_use]
            pub fn new(gid: impl Into<String>) -> Self {
                Self(gid.into())
            }

            /// Build the global ID from the number a merchant sees.
            ///
            /// The input is not validated; it is appended verbatim.
            #[must_use]
            pub fn from_legacy(legacy_id: &str) -> Self {
                Self(format!(
                    "{}{}/{}",
                    $crate::types::id::GID_PREFIX,
                    Self::RESOURCE,
                    legacy_id
                ))
            }

            /// Get the full global ID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Get the trailing number of the global ID.
            #[must_use]
            pub fn legacy_id(&self) -> &str {
                $crate::types::id::legacy_id(&self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(gid: String) -> Self {
                Self(gid)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Return the last `/`-separated segment of an ID.
///
/// Works for both full GIDs and bare numbers, so it is safe to call on
/// whatever the merchant typed.
///
/// ```rust
/// # use merchant_tools_core::types::id::legacy_id;
/// assert_eq!(legacy_id("gid://shopify/Order/5414420775206"), "5414420775206");
/// assert_eq!(legacy_id("5414420775206"), "5414420775206");
/// ```
#[must_use]
pub fn legacy_id(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

define_gid!(OrderGid, "Order");
define_gid!(FulfillmentOrderGid, "FulfillmentOrder");
define_gid!(FulfillmentGid, "Fulfillment");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_gid_from_legacy() {
        let id = OrderGid::from_legacy("5414420775206");
        assert_eq!(id.as_str(), "gid://shopify/Order/5414420775206");
        assert_eq!(id.legacy_id(), "5414420775206");
    }

    #[test]
    fn test_from_legacy_does_not_validate() {
        let id = OrderGid::from_legacy("not-a-number");
        assert_eq!(id.as_str(), "gid://shopify/Order/not-a-number");

        let id = OrderGid::from_legacy("");
        assert_eq!(id.as_str(), "gid://shopify/Order/");
        assert_eq!(id.legacy_id(), "");
    }

    #[test]
    fn test_legacy_id_of_bare_value() {
        assert_eq!(legacy_id("12345"), "12345");
        assert_eq!(legacy_id(""), "");
        assert_eq!(legacy_id("a/b/c"), "c");
    }

    #[test]
    fn test_fulfillment_order_gid() {
        let id = FulfillmentOrderGid::new("gid://shopify/FulfillmentOrder/6543");
        assert_eq!(id.legacy_id(), "6543");
        assert_eq!(id.to_string(), "gid://shopify/FulfillmentOrder/6543");
    }

    #[test]
    fn test_gid_serde_is_transparent() {
        let id = OrderGid::from_legacy("1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"gid://shopify/Order/1\"");

        let back: OrderGid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
