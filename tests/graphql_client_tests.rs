//! Integration tests for the GraphQL client.
//!
//! These tests use wiremock to check the endpoint, content type and
//! credential header chosen for each surface and mode.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use shopify_rest_core::clients::{ApiSurfaceType, HttpError, HttpRequest, HttpResponse, Transport};
use shopify_rest_core::{
    AccessToken, ApiSecretKey, ApiVersion, GraphqlClient, GraphqlError, HttpClient,
    Session, ShopDomain, ShopifyConfig, ShopifyError,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn public_config() -> ShopifyConfig {
    ShopifyConfig::builder()
        .api_version(ApiVersion::V2024_10)
        .build()
        .unwrap()
}

fn private_config(storefront_token: Option<&str>) -> ShopifyConfig {
    let mut builder = ShopifyConfig::builder()
        .api_secret_key(ApiSecretKey::new("test_secret_key").unwrap())
        .api_version(ApiVersion::V2024_10)
        .is_private_app(true);
    if let Some(token) = storefront_token {
        builder = builder.private_app_storefront_access_token(AccessToken::new(token).unwrap());
    }
    builder.build().unwrap()
}

fn create_client(
    server: &MockServer,
    surface: ApiSurfaceType,
    config: &ShopifyConfig,
    access_token: Option<&str>,
) -> GraphqlClient {
    let transport = HttpClient::with_base_uri(server.uri(), Some(config)).unwrap();
    GraphqlClient::with_transport(transport, surface, config, access_token).unwrap()
}

#[derive(Default)]
struct CountingTransport {
    calls: AtomicUsize,
}

#[async_trait]
impl Transport for CountingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HttpResponse::new(200, HashMap::new(), json!({})))
    }
}

// ============================================================================
// Admin API Tests
// ============================================================================

#[tokio::test]
async fn test_admin_query_string_sent_as_graphql() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2024-10/graphql.json"))
        .and(header("Content-Type", "application/graphql"))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(body_string("{ shop { name } }"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"shop": {"name": "Test"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, ApiSurfaceType::Admin, &public_config(), Some("test-token"));
    let response = assert_ok!(client.query("{ shop { name } }", None).await);

    assert_eq!(response.body["data"]["shop"]["name"], "Test");
}

#[tokio::test]
async fn test_admin_query_object_sent_as_json() {
    let payload = json!({
        "query": "query GetProduct($id: ID!) { product(id: $id) { title } }",
        "variables": {"id": "gid://shopify/Product/1"}
    });

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2024-10/graphql.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, ApiSurfaceType::Admin, &public_config(), Some("test-token"));
    assert_ok!(client.query(payload, None).await);
}

#[tokio::test]
async fn test_private_admin_uses_api_secret() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2024-10/graphql.json"))
        .and(header("X-Shopify-Access-Token", "test_secret_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = private_config(None);
    let client = create_client(&server, ApiSurfaceType::Admin, &config, None);
    assert_ok!(client.query("{ shop { name } }", None).await);
}

#[tokio::test]
async fn test_custom_headers_are_merged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2024-10/graphql.json"))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(header("X-Request-Source", "integration-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, ApiSurfaceType::Admin, &public_config(), Some("test-token"));
    let mut headers = HashMap::new();
    headers.insert("X-Request-Source".to_string(), "integration-test".to_string());

    assert_ok!(client.query("{ shop { name } }", Some(headers)).await);
}

#[tokio::test]
async fn test_graphql_errors_come_back_as_ok_responses() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2024-10/graphql.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Field 'nope' doesn't exist on type 'Shop'"}]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server, ApiSurfaceType::Admin, &public_config(), Some("test-token"));
    let response = assert_ok!(client.query("{ shop { nope } }", None).await);

    assert!(response.body["errors"].is_array());
}

// ============================================================================
// Storefront API Tests
// ============================================================================

#[tokio::test]
async fn test_storefront_query_uses_storefront_path_and_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/2024-10/graphql.json"))
        .and(header("X-Shopify-Storefront-Access-Token", "public-sf-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(
        &server,
        ApiSurfaceType::Storefront,
        &public_config(),
        Some("public-sf-token"),
    );
    assert_ok!(client.query("{ shop { name } }", None).await);
}

#[tokio::test]
async fn test_private_storefront_uses_configured_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/2024-10/graphql.json"))
        .and(header("X-Shopify-Storefront-Access-Token", "private_sf_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = private_config(Some("private_sf_token"));
    let client = create_client(&server, ApiSurfaceType::Storefront, &config, Some("ignored"));
    assert_ok!(client.query("{ shop { name } }", None).await);
}

#[tokio::test]
async fn test_private_storefront_without_token_fails_before_network() {
    let client = GraphqlClient::with_transport(
        CountingTransport::default(),
        ApiSurfaceType::Storefront,
        &private_config(None),
        None,
    )
    .unwrap();

    let error = assert_err!(client.query("{ shop { name } }", None).await);

    assert!(matches!(
        error,
        GraphqlError::Shopify(ShopifyError::MissingAccessToken { ref surface }) if surface == "Storefront"
    ));
    assert_eq!(client.transport().calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Argument Validation Tests
// ============================================================================

#[tokio::test]
async fn test_empty_query_fails() {
    let client = GraphqlClient::with_transport(
        CountingTransport::default(),
        ApiSurfaceType::Admin,
        &public_config(),
        Some("test-token"),
    )
    .unwrap();

    let error = assert_err!(client.query("", None).await);

    assert_eq!(error.to_string(), "Missing required argument: Query missing.");
    assert_eq!(client.transport().calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_construction_without_token_fails() {
    let result = GraphqlClient::new(
        &ShopDomain::new("test-shop").unwrap(),
        ApiSurfaceType::Admin,
        None,
        &public_config(),
    );

    match result {
        Err(GraphqlError::Shopify(ShopifyError::MissingRequiredArgument { reason })) => {
            assert_eq!(reason, "Missing access token when creating GraphQL client");
        }
        other => panic!("expected MissingRequiredArgument, got {:?}", other.err()),
    }
}

#[test]
fn test_from_session_targets_admin() {
    let session = Session::new(
        "offline_test-shop.myshopify.com".to_string(),
        ShopDomain::new("test-shop").unwrap(),
        "shpat_session".to_string(),
        false,
        None,
    );

    let client = GraphqlClient::from_session(&session, &public_config()).unwrap();
    assert_eq!(client.surface(), ApiSurfaceType::Admin);
}
