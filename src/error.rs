//! Error types shared across the crate.
//!
//! Two families live here:
//!
//! - [`ConfigError`]: validation failures while building configuration
//!   values and newtypes.
//! - [`ShopifyError`]: failures raised by the request core before anything
//!   is sent over the network (missing credentials, unsupported API surface).
//!
//! Transport failures have their own type, [`HttpError`](crate::clients::HttpError),
//! and are passed through the clients unchanged.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest_core::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Shopify API key.")]
    EmptyApiKey,

    /// API secret key cannot be empty.
    #[error("API secret key cannot be empty. Please provide a valid Shopify API secret key.")]
    EmptyApiSecretKey,

    /// Access tokens cannot be empty.
    #[error("Access token cannot be empty.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name', 'shop-name.myshopify.com' or a custom host name.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },
}

/// Errors raised by the request core.
///
/// Every variant is produced before a request reaches the transport, so a
/// caller never has to worry about a half-sent request when one of these is
/// returned.
///
/// Use [`ShopifyError::requires_reauthentication`] to tell credential
/// problems (prompt the merchant again) apart from configuration bugs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShopifyError {
    /// A required argument was not supplied.
    ///
    /// Raised when a client is created without an access token outside of
    /// private-app mode, or when a GraphQL query is empty.
    #[error("Missing required argument: {reason}")]
    MissingRequiredArgument {
        /// What was missing.
        reason: String,
    },

    /// The API surface is not supported by the requested operation.
    #[error("Unsupported API client type '{surface}'")]
    UnsupportedSurfaceType {
        /// The surface type that was rejected.
        surface: String,
    },

    /// The surface/mode combination resolved to an empty credential.
    #[error("Could not determine the access token header for API client type '{surface}'")]
    MissingAccessToken {
        /// The surface type whose token could not be resolved.
        surface: String,
    },
}

impl ShopifyError {
    /// Returns `true` when the failure is about credentials rather than
    /// configuration, i.e. the caller may recover by authenticating again.
    #[must_use]
    pub const fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredArgument { .. } | Self::MissingAccessToken { .. }
        )
    }
}
