//! Configuration types for the request core.
//!
//! Configuration is a plain value passed to each client at construction.
//! Nothing here is global: two clients built from two configurations never
//! observe each other.
//!
//! - [`ShopifyConfig`]: API version, private-app mode and its secrets
//! - [`ShopifyConfigBuilder`]: builder for [`ShopifyConfig`]
//! - [`ApiKey`], [`ApiSecretKey`], [`AccessToken`], [`ShopDomain`]: validated newtypes
//! - [`ApiVersion`]: the API version rendered into request paths
//!
//! # Example
//!
//! ```rust
//! use shopify_rest_core::{AccessToken, ApiKey, ApiSecretKey, ApiVersion, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("my-secret").unwrap())
//!     .private_app_storefront_access_token(AccessToken::new("storefront-token").unwrap())
//!     .is_private_app(true)
//!     .api_version(ApiVersion::V2024_10)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.is_private_app());
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiKey, ApiSecretKey, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration shared by the REST and GraphQL clients.
///
/// `ShopifyConfig` is `Clone + Send + Sync`. Clients clone it on
/// construction, which gives every request a consistent snapshot.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    private_app_storefront_access_token: Option<AccessToken>,
    api_version: ApiVersion,
    is_private_app: bool,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the app's API key, if configured.
    ///
    /// Requests never send it; it only identifies the app to the caller.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the API secret key, if configured.
    ///
    /// Private apps send this value as their Admin API access token.
    #[must_use]
    pub const fn api_secret_key(&self) -> Option<&ApiSecretKey> {
        self.api_secret_key.as_ref()
    }

    /// Returns the Storefront access token used in private-app mode.
    #[must_use]
    pub const fn private_app_storefront_access_token(&self) -> Option<&AccessToken> {
        self.private_app_storefront_access_token.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns whether the app authenticates with process-wide secrets
    /// instead of per-merchant access tokens.
    #[must_use]
    pub const fn is_private_app(&self) -> bool {
        self.is_private_app
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// Every field is optional.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `is_private_app`: `false`
/// - `api_key`, `api_secret_key`, `private_app_storefront_access_token`, `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    private_app_storefront_access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    is_private_app: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret key.
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Sets the Storefront token used when running as a private app.
    #[must_use]
    pub fn private_app_storefront_access_token(mut self, token: AccessToken) -> Self {
        self.private_app_storefront_access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Switches private-app mode on or off.
    #[must_use]
    pub const fn is_private_app(mut self, private_app: bool) -> Self {
        self.is_private_app = Some(private_app);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// No field is required, so this currently always returns `Ok`. Invalid
    /// values are already rejected by the newtype constructors.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        Ok(ShopifyConfig {
            api_key: self.api_key,
            api_secret_key: self.api_secret_key,
            private_app_storefront_access_token: self.private_app_storefront_access_token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            is_private_app: self.is_private_app.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
