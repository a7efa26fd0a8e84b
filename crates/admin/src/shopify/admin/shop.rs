//! Shop information for the Admin API.

use tracing::instrument;

use super::{AdminClient, AdminShopifyError, queries::GetShopDomain};

impl AdminClient {
    /// Get the shop's canonical `.myshopify.com` domain.
    ///
    /// Also serves as the readiness probe: it is the cheapest authorized
    /// query the Admin API offers.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn get_shop_domain(&self) -> Result<String, AdminShopifyError> {
        let variables = super::queries::get_shop_domain::Variables;

        let response = self.execute::<GetShopDomain>(variables).await?;

        Ok(response.shop.myshopify_domain)
    }
}
