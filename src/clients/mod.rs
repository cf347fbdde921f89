//! Request dispatch for the Shopify REST and GraphQL APIs.
//!
//! # Overview
//!
//! - [`RestClient`]: versioned, authenticated REST requests with `Link`
//!   header pagination
//! - [`GraphqlClient`]: Admin and Storefront GraphQL queries
//! - [`Transport`]: the trait the clients send through; [`HttpClient`] is the
//!   `reqwest` implementation
//! - [`ApiSurfaceType`]: which API product a client targets
//! - [`resolve_access_token_header`]: picks the credential header per
//!   surface and mode
//! - [`rest_path`] / [`graphql_path`] / [`strip_rest_path`]: versioned paths
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest_core::clients::{HttpMethod, HttpRequest, RestClient};
//!
//! let client = RestClient::from_session(&session, &config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "products")
//!     .query_param("limit", 10)
//!     .build()?;
//! let response = client.request(request).await?;
//!
//! if let Some(page_info) = &response.page_info {
//!     println!("next page: {:?}", page_info.next_page);
//! }
//! ```
//!
//! # Retry Behavior
//!
//! The clients never retry. [`HttpClient`] retries 429 and 500 responses when
//! a request's `tries` is above 1:
//!
//! - **429 (Rate Limited)**: waits for `Retry-After`, or 1 second if absent
//! - **500 (Server Error)**: waits 1 second
//! - **Other errors**: returned immediately

mod access_token;
mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;
mod path;
pub mod rest;
mod surface;
mod transport;

pub use access_token::{
    resolve_access_token_header, AccessTokenHeader, ACCESS_TOKEN_HEADER,
    STOREFRONT_ACCESS_TOKEN_HEADER,
};
pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder, Query};
pub use http_response::{ApiCallLimit, HttpResponse};
pub use path::{base_prefix, graphql_path, rest_path, strip_rest_path};
pub use surface::ApiSurfaceType;
pub use transport::Transport;

pub use rest::{PageInfo, RequestDescriptor, RestClient, RestError, RestResponse};

pub use graphql::{GraphqlClient, GraphqlError, GraphqlQuery};
