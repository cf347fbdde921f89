//! Versioned request path construction.
//!
//! REST paths have the shape `/admin/api/{version}/{resource}.json`. The
//! `.json` suffix is part of the wire contract. [`strip_rest_path`] inverts
//! [`rest_path`], which is how pagination links are turned back into
//! relative resource paths.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::clients::ApiSurfaceType;
use crate::config::ApiVersion;
use crate::error::ShopifyError;

const ADMIN_PREFIX: &str = "/admin/api";
const STOREFRONT_PREFIX: &str = "/api";

static ADMIN_REST_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/admin/api/[^/]+/(.*)\.json$").expect("admin REST path pattern is valid")
});

/// Returns the path prefix of a surface, e.g. `/admin/api`.
#[must_use]
pub const fn base_prefix(surface: ApiSurfaceType) -> &'static str {
    match surface {
        ApiSurfaceType::Admin => ADMIN_PREFIX,
        ApiSurfaceType::Storefront => STOREFRONT_PREFIX,
    }
}

fn rest_prefix(surface: ApiSurfaceType) -> Result<&'static str, ShopifyError> {
    match surface {
        ApiSurfaceType::Admin => Ok(ADMIN_PREFIX),
        ApiSurfaceType::Storefront => Err(ShopifyError::UnsupportedSurfaceType {
            surface: surface.to_string(),
        }),
    }
}

/// Builds a versioned REST path for a relative resource.
///
/// # Errors
///
/// Returns [`ShopifyError::UnsupportedSurfaceType`] for surfaces without a
/// REST API (Storefront).
///
/// # Example
///
/// ```rust
/// use shopify_rest_core::clients::{rest_path, ApiSurfaceType};
/// use shopify_rest_core::ApiVersion;
///
/// let path = rest_path(ApiSurfaceType::Admin, &ApiVersion::V2024_10, "products/123").unwrap();
/// assert_eq!(path, "/admin/api/2024-10/products/123.json");
///
/// assert!(rest_path(ApiSurfaceType::Storefront, &ApiVersion::V2024_10, "products").is_err());
/// ```
pub fn rest_path(
    surface: ApiSurfaceType,
    version: &ApiVersion,
    resource: &str,
) -> Result<String, ShopifyError> {
    let prefix = rest_prefix(surface)?;
    Ok(format!("{prefix}/{version}/{resource}.json"))
}

/// Builds the GraphQL endpoint path for a surface.
///
/// ```rust
/// use shopify_rest_core::clients::{graphql_path, ApiSurfaceType};
/// use shopify_rest_core::ApiVersion;
///
/// assert_eq!(graphql_path(ApiSurfaceType::Admin, &ApiVersion::UNSTABLE), "/admin/api/unstable/graphql.json");
/// assert_eq!(graphql_path(ApiSurfaceType::Storefront, &ApiVersion::UNSTABLE), "/api/unstable/graphql.json");
/// ```
#[must_use]
pub fn graphql_path(surface: ApiSurfaceType, version: &ApiVersion) -> String {
    format!("{}/{version}/graphql.json", base_prefix(surface))
}

/// Recovers the relative resource from a full REST URL path.
///
/// Returns `Ok(None)` when the path does not have the
/// `{prefix}/{version}/{resource}.json` shape.
///
/// # Errors
///
/// Returns [`ShopifyError::UnsupportedSurfaceType`] for surfaces without a
/// REST API.
pub fn strip_rest_path(
    surface: ApiSurfaceType,
    url_path: &str,
) -> Result<Option<String>, ShopifyError> {
    rest_prefix(surface)?;
    Ok(ADMIN_REST_PATH
        .captures(url_path)
        .and_then(|captures| captures.get(1))
        .map(|resource| resource.as_str().to_string()))
}
