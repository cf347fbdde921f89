//! REST client implementation for the Shopify Admin API.
//!
//! This module provides [`RestClient`], which turns relative resource
//! requests into authenticated, versioned requests, hands them to a
//! [`Transport`], and reconstructs pagination from the `Link` header.

use std::fmt;

use crate::auth::Session;
use crate::clients::access_token::{require_session_token, resolve_access_token_header};
use crate::clients::path::rest_path;
use crate::clients::rest::pagination::{parse_link_header, PageInfo};
use crate::clients::rest::RestError;
use crate::clients::{
    ApiSurfaceType, DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse, Query,
    Transport,
};
use crate::config::{ApiVersion, ShopDomain, ShopifyConfig};

/// A REST response together with its pagination state.
///
/// `page_info` is `Some` only when the request carried a query and the
/// response carried a `Link` header.
#[derive(Clone, Debug, PartialEq)]
pub struct RestResponse {
    /// The response exactly as the transport returned it.
    pub response: HttpResponse,
    /// Pagination reconstructed from the `Link` header.
    pub page_info: Option<PageInfo>,
}

impl RestResponse {
    /// Returns the parsed response body.
    #[must_use]
    pub const fn body(&self) -> &serde_json::Value {
        &self.response.body
    }
}

/// REST API client for the Shopify Admin API.
///
/// The client is generic over its [`Transport`]; the default is
/// [`HttpClient`]. Each client has exactly one [`ApiSurfaceType`] and its
/// configuration is fixed at construction.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync` when its transport is, and every request
/// method takes `&self`, so a single client can serve concurrent tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest_core::{RestClient, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder().build().unwrap();
///
/// let client = RestClient::new(&ShopDomain::new("my-store")?, Some("shpat_xxx"), &config)?;
///
/// let response = client.get("products", None).await?;
/// println!("Products: {}", response.body());
///
/// let body = serde_json::json!({"product": {"title": "New Product"}});
/// let response = client.post("products", body, None).await?;
/// ```
pub struct RestClient<T: Transport = HttpClient> {
    transport: T,
    surface: ApiSurfaceType,
    config: ShopifyConfig,
    access_token: Option<String>,
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient<HttpClient> {
    /// Creates an Admin REST client for `shop` using the default transport.
    ///
    /// `access_token` is the merchant's token. It may be `None` only in
    /// private-app mode, where the configured secret is used instead.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Shopify`] with
    /// [`ShopifyError::MissingRequiredArgument`](crate::ShopifyError::MissingRequiredArgument)
    /// when no token is given outside private-app mode, and
    /// [`RestError::Http`] if the HTTP transport cannot be created.
    pub fn new(
        shop: &ShopDomain,
        access_token: Option<&str>,
        config: &ShopifyConfig,
    ) -> Result<Self, RestError> {
        let transport = HttpClient::new(shop, Some(config))?;
        Self::with_transport(transport, ApiSurfaceType::Admin, config, access_token)
    }

    /// Creates an Admin REST client from a session's shop and access token.
    ///
    /// # Errors
    ///
    /// Same as [`RestClient::new`].
    pub fn from_session(session: &Session, config: &ShopifyConfig) -> Result<Self, RestError> {
        Self::new(&session.shop, session.access_token(), config)
    }
}

impl<T: Transport> RestClient<T> {
    /// Creates a client over a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Shopify`] when no token is given outside
    /// private-app mode.
    pub fn with_transport(
        transport: T,
        surface: ApiSurfaceType,
        config: &ShopifyConfig,
        access_token: Option<&str>,
    ) -> Result<Self, RestError> {
        let access_token = require_session_token(config, access_token, "REST")?;

        Ok(Self {
            transport,
            surface,
            config: config.clone(),
            access_token,
            api_version: config.api_version().clone(),
        })
    }

    /// Overrides the API version taken from the configuration.
    #[must_use]
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        if version == self.api_version {
            tracing::debug!(
                "Rest client has a redundant API version override to the default {}",
                self.api_version
            );
        } else {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                self.api_version,
                version
            );
        }
        self.api_version = version;
        self
    }

    /// Returns the API version used in request paths.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API surface this client targets.
    #[must_use]
    pub const fn surface(&self) -> ApiSurfaceType {
        self.surface
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Dispatches a request whose `path` is a relative resource.
    ///
    /// The credential header is resolved and merged under the request's own
    /// headers, the path is rewritten to `/admin/api/{version}/{resource}.json`
    /// and the request is sent once through the transport. Retries, if any,
    /// are the transport's business.
    ///
    /// # Errors
    ///
    /// - [`RestError::Shopify`] when no credential can be resolved or the
    ///   surface has no REST API. Nothing is sent.
    /// - [`RestError::InvalidPath`] for an empty resource. Nothing is sent.
    /// - [`RestError::Http`] with the transport's error, unchanged.
    pub async fn request(&self, request: HttpRequest) -> Result<RestResponse, RestError> {
        let header =
            resolve_access_token_header(self.surface, &self.config, self.access_token.as_deref())?;
        let resource = normalize_path(&request.path)?;
        let path = rest_path(self.surface, &self.api_version, resource)?;

        let original_query = request.query.clone();
        let request = HttpRequest {
            path,
            extra_headers: Some(header.merge_into(request.extra_headers)),
            ..request
        };

        tracing::debug!("REST {} {}", request.http_method, request.path);
        let response = self.transport.send(request).await?;

        let page_info = match (original_query, response.header("link")) {
            (Some(query), Some(link)) => Some(PageInfo::reconstruct(
                &query,
                &parse_link_header(link),
                self.surface,
            )),
            _ => None,
        };

        Ok(RestResponse {
            response,
            page_info,
        })
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = Query::new();
    /// query.insert("limit".to_string(), "50".to_string());
    /// let response = client.get("products", Some(query)).await?;
    /// ```
    pub async fn get(&self, path: &str, query: Option<Query>) -> Result<RestResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> Result<RestResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> Result<RestResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn delete(
        &self,
        path: &str,
        query: Option<Query>,
    ) -> Result<RestResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Fetches the page after the one `page_info` came from.
    ///
    /// Returns `Ok(None)` when there is no next page.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn next_page(&self, page_info: &PageInfo) -> Result<Option<RestResponse>, RestError> {
        match &page_info.next_page {
            Some(page) => self.get(&page.path, Some(page.query.clone())).await.map(Some),
            None => Ok(None),
        }
    }

    /// Fetches the page before the one `page_info` came from.
    ///
    /// Returns `Ok(None)` when there is no previous page.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn prev_page(&self, page_info: &PageInfo) -> Result<Option<RestResponse>, RestError> {
        match &page_info.prev_page {
            Some(page) => self.get(&page.path, Some(page.query.clone())).await.map(Some),
            None => Ok(None),
        }
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Query>,
    ) -> Result<RestResponse, RestError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        self.request(builder.build()?).await
    }
}

impl<T: Transport + fmt::Debug> fmt::Debug for RestClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("transport", &self.transport)
            .field("surface", &self.surface)
            .field("api_version", &self.api_version)
            .field("access_token", &self.access_token.as_ref().map(|_| "*****"))
            .finish_non_exhaustive()
    }
}

/// Strips leading `/` characters and a trailing `.json` from a resource.
fn normalize_path(path: &str) -> Result<&str, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpError;
    use crate::config::ApiSecretKey;
    use crate::error::ShopifyError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Records every request and answers with a canned response.
    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<HttpRequest>>,
        link: Option<String>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.sent.lock().unwrap().push(request);
            let mut headers = HashMap::new();
            if let Some(link) = &self.link {
                headers.insert("Link".to_string(), vec![link.clone()]);
            }
            Ok(HttpResponse::new(200, headers, serde_json::json!({"ok": true})))
        }
    }

    fn config(private_app: bool) -> ShopifyConfig {
        ShopifyConfig::builder()
            .api_secret_key(ApiSecretKey::new("test_secret_key").unwrap())
            .api_version(ApiVersion::V2024_10)
            .is_private_app(private_app)
            .build()
            .unwrap()
    }

    fn client_with(transport: RecordingTransport) -> RestClient<RecordingTransport> {
        RestClient::with_transport(transport, ApiSurfaceType::Admin, &config(false), Some("shpat_1"))
            .unwrap()
    }

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash_and_suffix() {
        assert_eq!(normalize_path("/products").unwrap(), "products");
        assert_eq!(normalize_path("products.json").unwrap(), "products");
        assert_eq!(normalize_path("//products.json").unwrap(), "products");
        assert_eq!(normalize_path("orders/1/fulfillments").unwrap(), "orders/1/fulfillments");
    }

    #[test]
    fn test_normalize_path_rejects_empty_resources() {
        for path in ["", "/", "/.json", ".json"] {
            assert!(matches!(
                normalize_path(path),
                Err(RestError::InvalidPath { path: p }) if p == path
            ));
        }
    }

    // === Construction Tests ===

    #[test]
    fn test_construction_requires_token_outside_private_app() {
        let result = RestClient::with_transport(
            RecordingTransport::default(),
            ApiSurfaceType::Admin,
            &config(false),
            None,
        );
        assert!(matches!(
            result,
            Err(RestError::Shopify(ShopifyError::MissingRequiredArgument { .. }))
        ));
    }

    #[test]
    fn test_private_app_constructs_without_token() {
        let client = RestClient::with_transport(
            RecordingTransport::default(),
            ApiSurfaceType::Admin,
            &config(true),
            None,
        )
        .unwrap();
        assert_eq!(client.api_version(), &ApiVersion::V2024_10);
    }

    #[test]
    fn test_with_api_version_overrides_config() {
        let client = client_with(RecordingTransport::default()).with_api_version(ApiVersion::UNSTABLE);
        assert_eq!(client.api_version(), &ApiVersion::UNSTABLE);
    }

    #[test]
    fn test_debug_masks_access_token() {
        let client = RestClient::new(
            &ShopDomain::new("test-shop").unwrap(),
            Some("shpat_secret"),
            &config(false),
        )
        .unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("shpat_secret"));
        assert!(debug.contains("*****"));
    }

    // === Dispatch Tests ===

    #[tokio::test]
    async fn test_request_rewrites_path_and_adds_token() {
        let client = client_with(RecordingTransport::default());
        client.get("/products.json", None).await.unwrap();

        let sent = client.transport().sent.lock().unwrap();
        assert_eq!(sent[0].path, "/admin/api/2024-10/products.json");
        assert_eq!(
            sent[0].extra_headers.as_ref().unwrap()["X-Shopify-Access-Token"],
            "shpat_1"
        );
    }

    #[tokio::test]
    async fn test_private_app_uses_secret_over_session_token() {
        let client = RestClient::with_transport(
            RecordingTransport::default(),
            ApiSurfaceType::Admin,
            &config(true),
            Some("ignored"),
        )
        .unwrap();
        client.get("shop", None).await.unwrap();

        let sent = client.transport().sent.lock().unwrap();
        assert_eq!(
            sent[0].extra_headers.as_ref().unwrap()["X-Shopify-Access-Token"],
            "test_secret_key"
        );
    }

    #[tokio::test]
    async fn test_page_info_requires_query() {
        let transport = RecordingTransport {
            link: Some(
                r#"<https://s/admin/api/2024-10/products.json?page_info=a>; rel="next""#.to_string(),
            ),
            ..RecordingTransport::default()
        };
        let client = client_with(transport);

        let without_query = client.get("products", None).await.unwrap();
        assert!(without_query.page_info.is_none());

        let with_empty_query = client.get("products", Some(Query::new())).await.unwrap();
        let info = with_empty_query.page_info.unwrap();
        assert!(info.limit.is_none());
        assert_eq!(info.next_page.unwrap().path, "products");
    }

    #[tokio::test]
    async fn test_no_link_header_means_no_page_info() {
        let client = client_with(RecordingTransport::default());
        let mut query = Query::new();
        query.insert("limit".to_string(), "10".to_string());

        let response = client.get("products", Some(query)).await.unwrap();
        assert!(response.page_info.is_none());
        assert_eq!(response.body(), &serde_json::json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_storefront_surface_is_rejected_before_sending() {
        let client = RestClient::with_transport(
            RecordingTransport::default(),
            ApiSurfaceType::Storefront,
            &config(false),
            Some("token"),
        )
        .unwrap();

        let result = client.get("products", None).await;
        assert!(matches!(
            result,
            Err(RestError::Shopify(ShopifyError::UnsupportedSurfaceType { .. }))
        ));
        assert!(client.transport().sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_next_page_without_cursor_is_none() {
        let client = client_with(RecordingTransport::default());
        let result = client.next_page(&PageInfo::default()).await.unwrap();
        assert!(result.is_none());
        assert!(client.transport().sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
        assert_send_sync::<RestClient<RecordingTransport>>();
    }
}
