//! Authentication values consumed by the clients.
//!
//! The request core never fetches or refreshes credentials. A per-merchant
//! access token arrives either directly or through a [`Session`]; private
//! apps use the secrets held in [`ShopifyConfig`](crate::ShopifyConfig).

pub mod session;

pub use session::Session;
