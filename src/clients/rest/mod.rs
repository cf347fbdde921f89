//! REST Admin API client.
//!
//! - [`RestClient`]: dispatches requests and reconstructs pagination
//! - [`RestResponse`]: the transport response plus optional [`PageInfo`]
//! - [`PageInfo`] / [`RequestDescriptor`]: replayable cursors built from the
//!   `Link` header
//! - [`RestError`]: error type for REST operations
//!
//! # Paging through a collection
//!
//! ```rust,ignore
//! use shopify_rest_core::clients::{Query, RestClient};
//!
//! let client = RestClient::from_session(&session, &config)?;
//!
//! let mut query = Query::new();
//! query.insert("limit".to_string(), "50".to_string());
//!
//! let mut page = client.get("products", Some(query)).await?;
//! loop {
//!     println!("{}", page.response.body);
//!     let Some(info) = page.page_info.as_ref() else { break };
//!     match client.next_page(info).await? {
//!         Some(next) => page = next,
//!         None => break,
//!     }
//! }
//! ```
//!
//! Pagination is only reconstructed when the request carried a query (even
//! an empty one). Pass `Some(Query::new())` to opt in without parameters.
//!
//! # Path Normalization
//!
//! Leading `/` and a trailing `.json` are stripped from the resource before
//! the versioned path is built, so `products`, `/products` and
//! `products.json` all reach `/admin/api/{version}/products.json`.

mod client;
mod errors;
mod pagination;

pub use client::{RestClient, RestResponse};
pub use errors::RestError;
pub use pagination::{parse_link_header, PageInfo, ParsedLink, RequestDescriptor};
