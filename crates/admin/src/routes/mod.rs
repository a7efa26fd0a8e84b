//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Admin API reachability
//!
//! # Index
//! GET  /                       - Redirect to /app
//! GET  /app                    - Tool cards
//! POST /app                    - Redirect to the selected tool (selectApp)
//!
//! # Fulfillment
//! GET  /app/fulfillment        - Form and order list
//! POST /app/fulfillment        - Mark an order fulfilled (orderId)
//!
//! # Multipass
//! GET  /app/multipass          - Form
//! POST /app/multipass          - Show a login URL (secretKey, mailAddress)
//!
//! # JSON API
//! GET  /api/orders             - Order list rows
//! POST /api/fulfillment        - ActionData for a fulfillment
//! POST /api/multipass          - ActionData with the login URL
//! ```
//!
//! POST bodies may be URL-encoded or multipart.

pub mod api;
pub mod extract;
pub mod fulfillment;
pub mod health;
pub mod index;
pub mod multipass;

use axum::Router;

use crate::services::ActionData;
use crate::state::AppState;

/// Build the complete application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(index::router())
        .merge(fulfillment::router())
        .merge(multipass::router())
        .merge(api::router())
}

/// [`ActionData`] flattened for templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionView {
    pub message: Option<String>,
    pub error_message: Option<String>,
    pub error_detail: Option<String>,
    pub login_url: Option<String>,
}

impl From<&ActionData> for ActionView {
    fn from(data: &ActionData) -> Self {
        match data {
            ActionData::Message { message } => Self {
                message: Some(message.clone()),
                ..Self::default()
            },
            ActionData::Error {
                error_message,
                error_detail,
            } => Self {
                error_message: Some(error_message.clone()),
                error_detail: error_detail.clone(),
                ..Self::default()
            },
            ActionData::LoginUrl { url, .. } => Self {
                login_url: Some(url.clone()),
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_view_from_error() {
        let view = ActionView::from(&ActionData::error("failed", Some("detail".to_string())));
        assert_eq!(view.message, None);
        assert_eq!(view.error_message.as_deref(), Some("failed"));
        assert_eq!(view.error_detail.as_deref(), Some("detail"));
    }

    #[test]
    fn test_action_view_from_login_url() {
        let view = ActionView::from(&ActionData::LoginUrl {
            url: "https://shop.myshopify.com/account/login/multipass/t".to_string(),
            token: "t".to_string(),
            mail_address: "a@example.com".to_string(),
        });
        assert_eq!(
            view.login_url.as_deref(),
            Some("https://shop.myshopify.com/account/login/multipass/t")
        );
        assert_eq!(view.message, None);
        assert_eq!(view.error_message, None);
    }

    #[test]
    fn test_action_view_from_message() {
        let view = ActionView::from(&ActionData::message("done"));
        assert_eq!(view.message.as_deref(), Some("done"));
        assert_eq!(view.error_message, None);
    }
}
