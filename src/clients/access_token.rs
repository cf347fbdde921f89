//! Access-token header resolution.
//!
//! Every request carries exactly one credential header. Which header, and
//! which value, depends on the API surface and on whether the app runs in
//! private-app mode:
//!
//! | Surface    | Header                              | Private app                              | Otherwise     |
//! |------------|-------------------------------------|------------------------------------------|---------------|
//! | Admin      | `X-Shopify-Access-Token`            | `api_secret_key`                         | session token |
//! | Storefront | `X-Shopify-Storefront-Access-Token` | `private_app_storefront_access_token`    | session token |
//!
//! A blank credential is never emitted: resolution fails with
//! [`ShopifyError::MissingAccessToken`] instead.

use std::collections::HashMap;
use std::fmt;

use crate::clients::ApiSurfaceType;
use crate::config::ShopifyConfig;
use crate::error::ShopifyError;

/// HTTP header carrying Admin API access tokens.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// HTTP header carrying Storefront API access tokens.
pub const STOREFRONT_ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// A resolved credential header, built fresh for each request.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessTokenHeader {
    /// The header name.
    pub header_name: &'static str,
    /// The header value; never empty.
    pub header_value: String,
}

impl AccessTokenHeader {
    /// Merges this header under the caller's extra headers.
    ///
    /// Caller headers win on collision, compared case-insensitively, so a
    /// caller can deliberately override the computed credential.
    #[must_use]
    pub fn merge_into(self, extra: Option<HashMap<String, String>>) -> HashMap<String, String> {
        let extra = extra.unwrap_or_default();
        let overridden = extra
            .keys()
            .any(|key| key.eq_ignore_ascii_case(self.header_name));

        let mut headers = HashMap::with_capacity(extra.len() + 1);
        if !overridden {
            headers.insert(self.header_name.to_string(), self.header_value);
        }
        headers.extend(extra);
        headers
    }
}

impl fmt::Debug for AccessTokenHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenHeader")
            .field("header_name", &self.header_name)
            .field("header_value", &"*****")
            .finish()
    }
}

/// Resolves the credential header for a request.
///
/// In private-app mode the configured secret is used and `session_token` is
/// ignored, even when present.
///
/// # Errors
///
/// Returns [`ShopifyError::MissingAccessToken`] when the selected value is
/// absent or empty.
///
/// # Example
///
/// ```rust
/// use shopify_rest_core::clients::{resolve_access_token_header, ApiSurfaceType};
/// use shopify_rest_core::ShopifyConfig;
///
/// let config = ShopifyConfig::builder().build().unwrap();
///
/// let header = resolve_access_token_header(ApiSurfaceType::Admin, &config, Some("shpat_1")).unwrap();
/// assert_eq!(header.header_name, "X-Shopify-Access-Token");
/// assert_eq!(header.header_value, "shpat_1");
/// ```
pub fn resolve_access_token_header(
    surface: ApiSurfaceType,
    config: &ShopifyConfig,
    session_token: Option<&str>,
) -> Result<AccessTokenHeader, ShopifyError> {
    let private_app = config.is_private_app();

    let (header_name, value) = match surface {
        ApiSurfaceType::Admin => (
            ACCESS_TOKEN_HEADER,
            if private_app {
                config.api_secret_key().map(AsRef::as_ref)
            } else {
                session_token
            },
        ),
        ApiSurfaceType::Storefront => (
            STOREFRONT_ACCESS_TOKEN_HEADER,
            if private_app {
                config
                    .private_app_storefront_access_token()
                    .map(AsRef::as_ref)
            } else {
                session_token
            },
        ),
    };

    match value {
        Some(value) if !value.is_empty() => Ok(AccessTokenHeader {
            header_name,
            header_value: value.to_string(),
        }),
        _ => Err(ShopifyError::MissingAccessToken {
            surface: surface.to_string(),
        }),
    }
}

/// Checks at client construction that a credential can be resolved later.
///
/// Outside private-app mode a non-empty access token is required.
pub(crate) fn require_session_token(
    config: &ShopifyConfig,
    access_token: Option<&str>,
    client_kind: &str,
) -> Result<Option<String>, ShopifyError> {
    let token = access_token.filter(|token| !token.is_empty());
    if token.is_none() && !config.is_private_app() {
        return Err(ShopifyError::MissingRequiredArgument {
            reason: format!("Missing access token when creating {client_kind} client"),
        });
    }
    Ok(token.map(str::to_string))
}
