//! # Shopify REST core
//!
//! The request-dispatch layer shared by Shopify's REST and GraphQL clients:
//! choosing the credential header for an API surface, building versioned
//! request paths, and turning a REST response's `Link` header back into
//! replayable page requests.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for credentials, shop domains and API versions
//! - [`RestClient`] with cursor pagination through [`PageInfo`]
//! - [`GraphqlClient`] for the Admin and Storefront APIs
//! - A [`Transport`](clients::Transport) seam with a `reqwest` default,
//!   [`HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest_core::{ApiVersion, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2024_10)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Paginating a REST collection
//!
//! ```rust,ignore
//! use shopify_rest_core::{Query, RestClient, Session, ShopDomain};
//!
//! let session = Session::new(
//!     "offline_my-store.myshopify.com".to_string(),
//!     ShopDomain::new("my-store")?,
//!     "shpat_xxx".to_string(),
//!     false,
//!     None,
//! );
//! let client = RestClient::from_session(&session, &config)?;
//!
//! let mut query = Query::new();
//! query.insert("limit".to_string(), "50".to_string());
//! let first = client.get("products", Some(query)).await?;
//!
//! if let Some(page_info) = &first.page_info {
//!     if let Some(second) = client.next_page(page_info).await? {
//!         println!("{}", second.body());
//!     }
//! }
//! ```
//!
//! ## Private apps
//!
//! With `is_private_app(true)` the clients ignore any per-merchant token and
//! authenticate with the configured secrets: `api_secret_key` for the Admin
//! API, `private_app_storefront_access_token` for the Storefront API. A
//! request that would go out with a blank credential fails with
//! [`ShopifyError::MissingAccessToken`] instead.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is a value passed to each client
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync` and requests take `&self`
//! - **Async-first**: designed for the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use config::{
    AccessToken, ApiKey, ApiSecretKey, ApiVersion, ShopDomain, ShopifyConfig,
    ShopifyConfigBuilder,
};
pub use error::{ConfigError, ShopifyError};

// Re-export client types
pub use clients::{
    ApiCallLimit, ApiSurfaceType, DataType, GraphqlClient, GraphqlError, GraphqlQuery,
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, PageInfo, Query,
    RequestDescriptor, RestClient, RestError, RestResponse,
};
