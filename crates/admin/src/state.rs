//! Application state shared across handlers.

use std::sync::Arc;

use merchant_tools_core::Locale;

use crate::config::AdminConfig;
use crate::i18n::Messages;
use crate::shopify::AdminClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Nothing in it changes after
/// startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    shopify: AdminClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Admin configuration
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let shopify = AdminClient::new(&config.shopify);

        Self {
            inner: Arc::new(AppStateInner { config, shopify }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the authorized Shopify Admin API client.
    #[must_use]
    pub fn shopify(&self) -> &AdminClient {
        &self.inner.shopify
    }

    /// Locale of user-facing text.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.inner.config.locale
    }

    /// Message catalog for the configured locale.
    #[must_use]
    pub fn messages(&self) -> &'static Messages {
        Messages::for_locale(self.locale())
    }
}
