//! GraphQL client implementation.

use std::collections::HashMap;
use std::fmt;

use crate::auth::Session;
use crate::clients::access_token::{require_session_token, resolve_access_token_header};
use crate::clients::graphql::GraphqlError;
use crate::clients::path::graphql_path;
use crate::clients::{
    ApiSurfaceType, DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse, Transport,
};
use crate::config::{ApiVersion, ShopDomain, ShopifyConfig};
use crate::error::ShopifyError;

/// The payload of a GraphQL request.
///
/// A raw document is sent as `application/graphql`. A JSON object, usually
/// `{"query": ..., "variables": ...}`, is sent as `application/json`.
///
/// ```rust
/// use shopify_rest_core::clients::GraphqlQuery;
/// use serde_json::json;
///
/// assert!(matches!(GraphqlQuery::from("{ shop { name } }"), GraphqlQuery::Document(_)));
/// assert!(matches!(GraphqlQuery::from(json!({"query": "{ shop { name } }"})), GraphqlQuery::Json(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum GraphqlQuery {
    /// A GraphQL document.
    Document(String),
    /// A JSON request body.
    Json(serde_json::Value),
}

impl GraphqlQuery {
    /// Returns `true` for an empty document, `null` or an empty object.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Document(document) => document.is_empty(),
            Self::Json(serde_json::Value::Null) => true,
            Self::Json(serde_json::Value::Object(map)) => map.is_empty(),
            Self::Json(_) => false,
        }
    }

    const fn data_type(&self) -> DataType {
        match self {
            Self::Document(_) => DataType::GraphQL,
            Self::Json(_) => DataType::Json,
        }
    }

    fn into_body(self) -> serde_json::Value {
        match self {
            Self::Document(document) => serde_json::Value::String(document),
            Self::Json(value) => value,
        }
    }
}

impl From<&str> for GraphqlQuery {
    fn from(document: &str) -> Self {
        Self::Document(document.to_string())
    }
}

impl From<String> for GraphqlQuery {
    fn from(document: String) -> Self {
        Self::Document(document)
    }
}

impl From<serde_json::Value> for GraphqlQuery {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// GraphQL client for one shop and one API surface.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync` when its transport is.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest_core::clients::{ApiSurfaceType, GraphqlClient};
///
/// let client = GraphqlClient::new(&shop, ApiSurfaceType::Admin, Some("shpat_xxx"), &config)?;
/// let response = client.query("{ shop { name } }", None).await?;
///
/// if let Some(errors) = response.body.get("errors") {
///     println!("GraphQL errors: {}", errors);
/// }
/// ```
pub struct GraphqlClient<T: Transport = HttpClient> {
    transport: T,
    surface: ApiSurfaceType,
    config: ShopifyConfig,
    access_token: Option<String>,
    api_version: ApiVersion,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient<HttpClient> {
    /// Creates a client for `shop` using the default transport.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Shopify`] with
    /// [`ShopifyError::MissingRequiredArgument`] when no token is given
    /// outside private-app mode, and [`GraphqlError::Http`] if the HTTP
    /// transport cannot be created.
    pub fn new(
        shop: &ShopDomain,
        surface: ApiSurfaceType,
        access_token: Option<&str>,
        config: &ShopifyConfig,
    ) -> Result<Self, GraphqlError> {
        let transport = HttpClient::new(shop, Some(config))?;
        Self::with_transport(transport, surface, config, access_token)
    }

    /// Creates an Admin client from a session's shop and access token.
    ///
    /// # Errors
    ///
    /// Same as [`GraphqlClient::new`].
    pub fn from_session(session: &Session, config: &ShopifyConfig) -> Result<Self, GraphqlError> {
        Self::new(
            &session.shop,
            ApiSurfaceType::Admin,
            session.access_token(),
            config,
        )
    }
}

impl<T: Transport> GraphqlClient<T> {
    /// Creates a client over a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Shopify`] when no token is given outside
    /// private-app mode.
    pub fn with_transport(
        transport: T,
        surface: ApiSurfaceType,
        config: &ShopifyConfig,
        access_token: Option<&str>,
    ) -> Result<Self, GraphqlError> {
        let access_token = require_session_token(config, access_token, "GraphQL")?;

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
        if version != self.api_version {
            tracing::debug!(
                "GraphQL client overriding default API version {} with {}",
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

    /// Sends a query once.
    ///
    /// `extra_headers` are merged over the credential header; a caller
    /// header with the same name wins.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Shopify`] with `MissingRequiredArgument` for an empty
    ///   payload, or `MissingAccessToken` when no credential can be resolved.
    ///   Nothing is sent in either case.
    /// - [`GraphqlError::Http`] with the transport's error, unchanged.
    pub async fn query(
        &self,
        data: impl Into<GraphqlQuery> + Send,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, GraphqlError> {
        self.query_with_tries(data, extra_headers, 1).await
    }

    /// Sends a query, letting the transport retry 429/500 up to `tries` times.
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::query`].
    pub async fn query_with_tries(
        &self,
        data: impl Into<GraphqlQuery> + Send,
        extra_headers: Option<HashMap<String, String>>,
        tries: u32,
    ) -> Result<HttpResponse, GraphqlError> {
        let data = data.into();
        if data.is_empty() {
            return Err(ShopifyError::MissingRequiredArgument {
                reason: "Query missing.".to_string(),
            }
            .into());
        }

        let header =
            resolve_access_token_header(self.surface, &self.config, self.access_token.as_deref())?;
        let path = graphql_path(self.surface, &self.api_version);

        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body_type(data.data_type())
            .body(data.into_body())
            .extra_headers(header.merge_into(extra_headers))
            .tries(tries)
            .build()?;

        tracing::debug!("GraphQL {} {}", request.http_method, request.path);
        Ok(self.transport.send(request).await?)
    }
}

impl<T: Transport + fmt::Debug> fmt::Debug for GraphqlClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphqlClient")
            .field("transport", &self.transport)
            .field("surface", &self.surface)
            .field("api_version", &self.api_version)
            .field("access_token", &self.access_token.as_ref().map(|_| "*****"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpError;
    use crate::config::{AccessToken, ApiSecretKey};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.sent.lock().unwrap().push(request);
            Ok(HttpResponse::new(
                200,
                HashMap::new(),
                json!({"data": {"shop": {"name": "Test Shop"}}}),
            ))
        }
    }

    fn config() -> ShopifyConfig {
        ShopifyConfig::builder()
            .api_version(ApiVersion::V2024_10)
            .build()
            .unwrap()
    }

    fn client(surface: ApiSurfaceType) -> GraphqlClient<RecordingTransport> {
        GraphqlClient::with_transport(RecordingTransport::default(), surface, &config(), Some("token"))
            .unwrap()
    }

    #[test]
    fn test_query_emptiness() {
        assert!(GraphqlQuery::from("").is_empty());
        assert!(GraphqlQuery::from(json!({})).is_empty());
        assert!(GraphqlQuery::Json(serde_json::Value::Null).is_empty());
        assert!(!GraphqlQuery::from("{ shop { name } }").is_empty());
        assert!(!GraphqlQuery::from(json!({"query": "{ shop { name } }"})).is_empty());
    }

    #[tokio::test]
    async fn test_document_is_sent_as_graphql_to_admin_path() {
        let client = client(ApiSurfaceType::Admin);
        client.query("{ shop { name } }", None).await.unwrap();

        let sent = client.transport().sent.lock().unwrap();
        assert_eq!(sent[0].path, "/admin/api/2024-10/graphql.json");
        assert_eq!(sent[0].http_method, HttpMethod::Post);
        assert_eq!(sent[0].body_type, Some(DataType::GraphQL));
        assert_eq!(sent[0].body_text().as_deref(), Some("{ shop { name } }"));
        assert_eq!(
            sent[0].extra_headers.as_ref().unwrap()["X-Shopify-Access-Token"],
            "token"
        );
    }

    #[tokio::test]
    async fn test_json_is_sent_as_json_to_storefront_path() {
        let client = client(ApiSurfaceType::Storefront);
        let payload = json!({"query": "{ shop { name } }", "variables": {"a": 1}});
        client.query(payload.clone(), None).await.unwrap();

        let sent = client.transport().sent.lock().unwrap();
        assert_eq!(sent[0].path, "/api/2024-10/graphql.json");
        assert_eq!(sent[0].body_type, Some(DataType::Json));
        assert_eq!(sent[0].body, Some(payload));
        assert_eq!(
            sent[0].extra_headers.as_ref().unwrap()["X-Shopify-Storefront-Access-Token"],
            "token"
        );
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected_before_sending() {
        let client = client(ApiSurfaceType::Admin);
        let result = client.query("", None).await;

        assert!(matches!(
            result,
            Err(GraphqlError::Shopify(ShopifyError::MissingRequiredArgument { reason }))
                if reason == "Query missing."
        ));
        assert!(client.transport().sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_private_storefront_uses_configured_token() {
        let config = ShopifyConfig::builder()
            .api_secret_key(ApiSecretKey::new("test_secret_key").unwrap())
            .private_app_storefront_access_token(AccessToken::new("private_sf").unwrap())
            .is_private_app(true)
            .build()
            .unwrap();
        let client = GraphqlClient::with_transport(
            RecordingTransport::default(),
            ApiSurfaceType::Storefront,
            &config,
            None,
        )
        .unwrap();

        client.query("{ shop { name } }", None).await.unwrap();

        let sent = client.transport().sent.lock().unwrap();
        assert_eq!(
            sent[0].extra_headers.as_ref().unwrap()["X-Shopify-Storefront-Access-Token"],
            "private_sf"
        );
    }

    #[tokio::test]
    async fn test_tries_are_forwarded_to_transport() {
        let client = client(ApiSurfaceType::Admin);
        client
            .query_with_tries("{ shop { name } }", None, 3)
            .await
            .unwrap();

        assert_eq!(client.transport().sent.lock().unwrap()[0].tries, 3);
    }
}
