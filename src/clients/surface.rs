//! API surface selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShopifyError;

/// The API product a client talks to.
///
/// The surface decides the path prefix and which header carries the
/// access token. A client's surface is fixed at construction.
///
/// # Example
///
/// ```rust
/// use shopify_rest_core::clients::ApiSurfaceType;
///
/// let surface: ApiSurfaceType = "storefront".parse().unwrap();
/// assert_eq!(surface, ApiSurfaceType::Storefront);
/// assert!("partner".parse::<ApiSurfaceType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiSurfaceType {
    /// The Admin API (REST and GraphQL).
    #[default]
    Admin,
    /// The Storefront API (GraphQL only).
    Storefront,
}

impl fmt::Display for ApiSurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("Admin"),
            Self::Storefront => f.write_str("Storefront"),
        }
    }
}

impl FromStr for ApiSurfaceType {
    type Err = ShopifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "storefront" => Ok(Self::Storefront),
            _ => Err(ShopifyError::UnsupportedSurfaceType {
                surface: s.to_string(),
            }),
        }
    }
}
