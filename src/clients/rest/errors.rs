//! REST-specific error types.
//!
//! - [`RestError::Shopify`]: credential or surface problems caught before sending
//! - [`RestError::InvalidPath`]: a resource path that is empty after normalization
//! - [`RestError::Http`]: whatever the transport reported, unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest_core::clients::RestError;
//!
//! match client.get("products", None).await {
//!     Ok(response) => println!("Products: {}", response.response.body),
//!     Err(RestError::Shopify(e)) if e.requires_reauthentication() => {
//!         println!("Ask the merchant to log in again: {e}");
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use crate::clients::{HttpError, InvalidHttpRequestError};
use crate::error::ShopifyError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// ```rust
/// use shopify_rest_core::clients::RestError;
///
/// let error = RestError::InvalidPath { path: "/.json".to_string() };
/// assert_eq!(error.to_string(), "Invalid REST API path: /.json");
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The request could not be prepared: no usable credential, or a surface
    /// without a REST API.
    #[error(transparent)]
    Shopify(#[from] ShopifyError),

    /// The resource path is empty once leading `/` and trailing `.json` are
    /// removed.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path as the caller supplied it.
        path: String,
    },

    /// The transport failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<InvalidHttpRequestError> for RestError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(error.into())
    }
}
