//! Security headers for a page that lives inside the Shopify admin iframe.
//!
//! `X-Frame-Options` cannot express an allow-list, so framing is controlled
//! only through CSP `frame-ancestors`: the shop's own admin domain and
//! `admin.shopify.com`.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS},
    },
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Content Security Policy for a given store domain.
#[must_use]
pub fn content_security_policy(store: &str) -> String {
    format!(
        "default-src 'none'; \
         script-src 'self'; \
         style-src 'self'; \
         img-src 'self'; \
         connect-src 'self'; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors https://{store} https://admin.shopify.com"
    )
}

/// Add security headers to all responses.
///
/// Pages show multipass secrets and login URLs, so nothing is cached.
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));
    headers.insert(
        HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("same-origin"),
    );

    match HeaderValue::from_str(&content_security_policy(&state.config().shopify.store)) {
        Ok(csp) => {
            headers.insert(CONTENT_SECURITY_POLICY, csp);
        }
        Err(e) => tracing::warn!(error = %e, "Store domain is not a valid header value"),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_allows_shop_admin_framing() {
        let csp = content_security_policy("test.myshopify.com");
        assert!(csp.ends_with(
            "frame-ancestors https://test.myshopify.com https://admin.shopify.com"
        ));
        assert!(csp.contains("script-src 'self'"));
    }
}
