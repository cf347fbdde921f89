//! The seam between the request core and the network.

use async_trait::async_trait;

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Sends fully specified requests.
///
/// The clients hand a transport requests whose `path` is already versioned
/// and whose headers already carry the credential. Retries, timeouts and
/// connection management belong to the transport; whatever it returns is
/// passed back to the caller unchanged.
///
/// [`HttpClient`](crate::clients::HttpClient) is the default implementation.
/// Tests can supply their own to observe requests without a network.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use shopify_rest_core::clients::{HttpError, HttpRequest, HttpResponse, Transport};
///
/// struct Canned;
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(200, Default::default(), serde_json::json!({})))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures, non-2xx responses and
    /// invalid requests.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}
