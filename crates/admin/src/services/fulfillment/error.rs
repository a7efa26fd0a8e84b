//! Fulfillment workflow error types.

use thiserror::Error;

use merchant_tools_core::FulfillmentStatus;

use crate::i18n::Messages;
use crate::services::ActionData;
use crate::shopify::{AdminShopifyError, UserError};

/// Ways marking an order fulfilled can fail.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    /// No order has the entered ID.
    #[error("order {order_id} not found")]
    NotFound {
        /// The ID exactly as entered.
        order_id: String,
    },

    /// The order is not in the unfulfilled state.
    #[error("order {order_id} is {}, not UNFULFILLED", .status.as_api_str())]
    InvalidState {
        order_id: String,
        status: FulfillmentStatus,
    },

    /// The order is unfulfilled but has no fulfillment order to fulfill.
    #[error("order {order_id} has no fulfillment order")]
    NoFulfillmentOrder { order_id: String },

    /// Shopify refused the fulfillment.
    #[error("fulfillment rejected: {}", join_user_errors(.0))]
    Rejected(Vec<UserError>),

    /// The Admin API call itself failed.
    #[error("Shopify error: {0}")]
    Remote(#[source] AdminShopifyError),
}

fn join_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(UserError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<AdminShopifyError> for FulfillmentError {
    fn from(err: AdminShopifyError) -> Self {
        match err {
            AdminShopifyError::UserErrors(errors) => Self::Rejected(errors),
            other => Self::Remote(other),
        }
    }
}

impl FulfillmentError {
    /// The localized message shown to the merchant.
    ///
    /// Remote failures collapse to one generic message; the cause only goes
    /// to the logs.
    #[must_use]
    pub fn to_action_data(&self, messages: &Messages) -> ActionData {
        match self {
            Self::NotFound { order_id } => {
                ActionData::error(messages.order_not_found(order_id), None)
            }
            Self::InvalidState { order_id, status } => ActionData::error(
                messages.enter_unfulfilled_order,
                Some(messages.current_status(order_id, &status.label(messages.locale))),
            ),
            Self::NoFulfillmentOrder { order_id } => ActionData::error(
                messages.update_failed,
                Some(messages.no_fulfillment_order(order_id)),
            ),
            Self::Rejected(errors) => ActionData::error(
                messages.update_failed,
                Some(
                    errors
                        .iter()
                        .map(|e| e.message.as_str())
                        .collect::<Vec<_>>()
                        .join(" / "),
                ),
            ),
            Self::Remote(_) => ActionData::error(messages.update_failed, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use merchant_tools_core::Locale;

    use super::*;

    #[test]
    fn test_user_errors_become_rejected() {
        let err = FulfillmentError::from(AdminShopifyError::UserErrors(vec![UserError {
            field: vec![],
            message: "Fulfillment order is closed".to_string(),
        }]));
        assert!(matches!(err, FulfillmentError::Rejected(ref e) if e.len() == 1));
    }

    #[test]
    fn test_other_shopify_errors_become_remote() {
        let err = FulfillmentError::from(AdminShopifyError::RateLimited(2));
        assert!(matches!(err, FulfillmentError::Remote(_)));
    }

    #[test]
    fn test_remote_hides_cause() {
        let messages = Messages::for_locale(Locale::En);
        let data = FulfillmentError::Remote(AdminShopifyError::Unauthorized("bad token".to_string()))
            .to_action_data(messages);

        assert_eq!(
            data,
            ActionData::error("Failed to update the fulfillment status", None)
        );
    }

    #[test]
    fn test_invalid_state_display() {
        let err = FulfillmentError::InvalidState {
            order_id: "1".to_string(),
            status: FulfillmentStatus::OnHold,
        };
        assert_eq!(err.to_string(), "order 1 is ON_HOLD, not UNFULFILLED");
    }
}
