//! Multipass login URL workflow.

use thiserror::Error;
use tracing::instrument;

use crate::multipass::{CustomerData, Multipass, MultipassError, login_url};
use crate::services::ActionData;
use crate::shopify::{AdminApi, AdminShopifyError};

/// Errors from generating a login URL.
#[derive(Debug, Error)]
pub enum LoginUrlError {
    /// The shop domain could not be fetched.
    #[error(transparent)]
    Shopify(#[from] AdminShopifyError),

    /// The token could not be encoded.
    #[error(transparent)]
    Multipass(#[from] MultipassError),
}

/// A generated multipass login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginUrl {
    pub url: String,
    pub token: String,
    pub mail_address: String,
}

impl From<LoginUrl> for ActionData {
    fn from(login: LoginUrl) -> Self {
        Self::LoginUrl {
            url: login.url,
            token: login.token,
            mail_address: login.mail_address,
        }
    }
}

/// Build a storefront login URL for `mail_address` signed with `secret_key`.
///
/// The shop's canonical `.myshopify.com` domain is fetched through `api`.
/// The email is not validated; Shopify creates a customer for unknown
/// addresses on first sign-in.
///
/// # Errors
///
/// Returns an error if the domain lookup fails, the shop reports no domain,
/// or the secret is empty.
#[instrument(skip_all)]
pub async fn generate_login_url(
    api: &impl AdminApi,
    secret_key: &str,
    mail_address: &str,
) -> Result<LoginUrl, LoginUrlError> {
    let domain = api.shop_domain().await?;

    let multipass = Multipass::new(secret_key)?;
    let token = multipass.encode(&CustomerData::new(mail_address))?;
    let url = login_url(&domain, &token)?;

    tracing::info!(shop = %domain, "Multipass login URL generated");

    Ok(LoginUrl {
        url,
        token,
        mail_address: mail_address.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::services::fulfillment::tests::FakeAdmin;

    #[tokio::test]
    async fn test_generates_decodable_url() {
        let api = FakeAdmin::with_orders(vec![]);

        let login = generate_login_url(&api, "abc123", "a@example.com")
            .await
            .unwrap();

        let token = login
            .url
            .strip_prefix("https://shop.myshopify.com/account/login/multipass/")
            .unwrap();
        assert_eq!(token, login.token);
        assert_eq!(login.mail_address, "a@example.com");

        let customer = Multipass::new("abc123").unwrap().decode(token).unwrap();
        assert_eq!(customer.email, "a@example.com");
        assert_eq!(customer.remote_ip, None);
        assert_eq!(customer.return_to, None);
    }

    #[tokio::test]
    async fn test_email_is_not_validated() {
        let api = FakeAdmin::with_orders(vec![]);

        let login = generate_login_url(&api, "abc123", "not an email")
            .await
            .unwrap();
        assert_eq!(login.mail_address, "not an email");
    }

    #[tokio::test]
    async fn test_empty_secret_fails() {
        let api = FakeAdmin::with_orders(vec![]);

        let err = generate_login_url(&api, "", "a@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, LoginUrlError::Multipass(MultipassError::EmptySecret)));
    }

    #[tokio::test]
    async fn test_empty_shop_domain_fails() {
        let mut api = FakeAdmin::with_orders(vec![]);
        api.shop_domain = String::new();

        let err = generate_login_url(&api, "abc123", "a@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, LoginUrlError::Multipass(MultipassError::MissingDomain)));
    }

    #[tokio::test]
    async fn test_email_stays_out_of_logs() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let api = FakeAdmin::with_orders(vec![]);
        generate_login_url(&api, "abc123", "taro@example.com")
            .await
            .unwrap();

        let output = logs.contents();
        assert!(output.contains("Multipass login URL generated"));
        assert!(!output.contains("taro@example.com"));
        assert!(!output.contains("abc123"));
    }

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_shop_lookup_failure() {
        let mut api = FakeAdmin::with_orders(vec![]);
        api.unavailable = true;

        let err = generate_login_url(&api, "abc123", "a@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, LoginUrlError::Shopify(_)));
    }

    #[test]
    fn test_action_data_from_login_url() {
        let data = ActionData::from(LoginUrl {
            url: "https://shop.myshopify.com/account/login/multipass/t".to_string(),
            token: "t".to_string(),
            mail_address: "a@example.com".to_string(),
        });
        assert!(matches!(data, ActionData::LoginUrl { ref token, .. } if token == "t"));
    }
}
