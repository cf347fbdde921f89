//! GraphQL-specific error types.
//!
//! GraphQL-level errors (validation, user errors) come back with HTTP 200
//! and live in `response.body["errors"]`; they are not represented here.

use crate::clients::{HttpError, InvalidHttpRequestError};
use crate::error::ShopifyError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// ```rust
/// use shopify_rest_core::clients::GraphqlError;
/// use shopify_rest_core::ShopifyError;
///
/// let error: GraphqlError = ShopifyError::MissingRequiredArgument {
///     reason: "Query missing.".to_string(),
/// }
/// .into();
/// assert_eq!(error.to_string(), "Missing required argument: Query missing.");
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The query could not be prepared: empty payload or no usable credential.
    #[error(transparent)]
    Shopify(#[from] ShopifyError),

    /// The transport failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<InvalidHttpRequestError> for GraphqlError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(error.into())
    }
}
