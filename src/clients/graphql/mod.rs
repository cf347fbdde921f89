//! GraphQL client for the Admin and Storefront APIs.
//!
//! - [`GraphqlClient`]: sends queries to `/admin/api/{version}/graphql.json`
//!   or `/api/{version}/graphql.json`
//! - [`GraphqlQuery`]: the payload, a raw document or a JSON object
//! - [`GraphqlError`]: error type for GraphQL operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest_core::clients::{ApiSurfaceType, GraphqlClient};
//! use serde_json::json;
//!
//! let admin = GraphqlClient::from_session(&session, &config)?;
//! let response = admin.query("{ shop { name } }", None).await?;
//! println!("Shop name: {}", response.body["data"]["shop"]["name"]);
//!
//! let storefront = GraphqlClient::new(&shop, ApiSurfaceType::Storefront, None, &config)?;
//! let response = storefront
//!     .query(
//!         json!({
//!             "query": "query GetProduct($id: ID!) { product(id: $id) { title } }",
//!             "variables": { "id": "gid://shopify/Product/123" }
//!         }),
//!         None,
//!     )
//!     .await?;
//! ```

mod client;
mod errors;

pub use client::{GraphqlClient, GraphqlQuery};
pub use errors::GraphqlError;
