//! Order fulfillment status and its merchant-facing labels.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// Display fulfillment status of an order (from Shopify).
///
/// Shopify has more values than the five this app labels, and adds new ones
/// over time. Anything unrecognized is kept verbatim in `Other` so it can be
/// shown to the merchant unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FulfillmentStatus {
    Fulfilled,
    Unfulfilled,
    OnHold,
    Scheduled,
    PartiallyFulfilled,
    /// Any other platform value, e.g. `IN_PROGRESS`.
    Other(String),
}

impl FulfillmentStatus {
    /// Parse the platform's `SCREAMING_SNAKE_CASE` value.
    #[must_use]
    pub fn from_api(value: &str) -> Self {
        match value {
            "FULFILLED" => Self::Fulfilled,
            "UNFULFILLED" => Self::Unfulfilled,
            "ON_HOLD" => Self::OnHold,
            "SCHEDULED" => Self::Scheduled,
            "PARTIALLY_FULFILLED" => Self::PartiallyFulfilled,
            other => Self::Other(other.to_string()),
        }
    }

    /// The platform's `SCREAMING_SNAKE_CASE` value.
    #[must_use]
    pub fn as_api_str(&self) -> &str {
        match self {
            Self::Fulfilled => "FULFILLED",
            Self::Unfulfilled => "UNFULFILLED",
            Self::OnHold => "ON_HOLD",
            Self::Scheduled => "SCHEDULED",
            Self::PartiallyFulfilled => "PARTIALLY_FULFILLED",
            Self::Other(value) => value,
        }
    }

    /// Whether a fulfillment can be created for an order in this state.
    #[must_use]
    pub const fn is_unfulfilled(&self) -> bool {
        matches!(self, Self::Unfulfilled)
    }

    /// Human-readable label in the given locale.
    ///
    /// Unknown values are returned unchanged.
    #[must_use]
    pub fn label(&self, locale: Locale) -> Cow<'_, str> {
        let label = match (self, locale) {
            (Self::Other(value), _) => return Cow::Borrowed(value),
            (Self::Fulfilled, Locale::En) => "fulfilled",
            (Self::Unfulfilled, Locale::En) => "unfulfilled",
            (Self::OnHold, Locale::En) => "on hold",
            (Self::Scheduled, Locale::En) => "scheduled",
            (Self::PartiallyFulfilled, Locale::En) => "partially fulfilled",
            (Self::Fulfilled, Locale::Ja) => "発送済",
            (Self::Unfulfilled, Locale::Ja) => "未発送",
            (Self::OnHold, Locale::Ja) => "保留",
            (Self::Scheduled, Locale::Ja) => "スケジュール済み",
            (Self::PartiallyFulfilled, Locale::Ja) => "一部発送済み",
        };
        Cow::Borrowed(label)
    }
}

impl std::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_api_str())
    }
}

impl From<String> for FulfillmentStatus {
    fn from(value: String) -> Self {
        Self::from_api(&value)
    }
}

impl From<FulfillmentStatus> for String {
    fn from(status: FulfillmentStatus) -> Self {
        match status {
            FulfillmentStatus::Other(value) => value,
            known => known.as_api_str().to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_english_labels() {
        let cases = [
            (FulfillmentStatus::Fulfilled, "fulfilled"),
            (FulfillmentStatus::Unfulfilled, "unfulfilled"),
            (FulfillmentStatus::OnHold, "on hold"),
            (FulfillmentStatus::Scheduled, "scheduled"),
            (FulfillmentStatus::PartiallyFulfilled, "partially fulfilled"),
        ];
        for (status, expected) in cases {
            assert_eq!(status.label(Locale::En), expected);
        }
    }

    #[test]
    fn test_japanese_labels() {
        assert_eq!(FulfillmentStatus::Fulfilled.label(Locale::Ja), "発送済");
        assert_eq!(FulfillmentStatus::Unfulfilled.label(Locale::Ja), "未発送");
        assert_eq!(FulfillmentStatus::OnHold.label(Locale::Ja), "保留");
        assert_eq!(
            FulfillmentStatus::Scheduled.label(Locale::Ja),
            "スケジュール済み"
        );
        assert_eq!(
            FulfillmentStatus::PartiallyFulfilled.label(Locale::Ja),
            "一部発送済み"
        );
    }

    #[test]
    fn test_unknown_status_passes_through() {
        let status = FulfillmentStatus::from_api("IN_PROGRESS");
        assert_eq!(status, FulfillmentStatus::Other("IN_PROGRESS".to_string()));
        assert_eq!(status.label(Locale::En), "IN_PROGRESS");
        assert_eq!(status.label(Locale::Ja), "IN_PROGRESS");
    }

    #[test]
    fn test_api_round_trip_for_known_values() {
        for value in [
            "FULFILLED",
            "UNFULFILLED",
            "ON_HOLD",
            "SCHEDULED",
            "PARTIALLY_FULFILLED",
        ] {
            assert_eq!(FulfillmentStatus::from_api(value).as_api_str(), value);
        }
    }

    #[test]
    fn test_only_unfulfilled_is_fulfillable() {
        assert!(FulfillmentStatus::Unfulfilled.is_unfulfilled());
        assert!(!FulfillmentStatus::Fulfilled.is_unfulfilled());
        assert!(!FulfillmentStatus::Other("UNFULFILLED ".to_string()).is_unfulfilled());
    }

    #[test]
    fn test_serde_uses_api_strings() {
        let json = serde_json::to_string(&FulfillmentStatus::OnHold).unwrap();
        assert_eq!(json, "\"ON_HOLD\"");

        let status: FulfillmentStatus = serde_json::from_str("\"RESTOCKED\"").unwrap();
        assert_eq!(status, FulfillmentStatus::Other("RESTOCKED".to_string()));
    }
}
