// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client handle and request dispatcher
//!
//! [`ExplorerClient`] owns the base URL and the transport. Every call, whether made
//! directly or through a resource proxy, goes through one dispatcher that:
//!
//! 1. checks that the base URL ends with `/`,
//! 2. resolves the relative path against it,
//! 3. encodes the optional body as JSON,
//! 4. sets `Content-Type: application/json` and `API-Version`,
//! 5. executes the request, racing it against the caller's cancellation token.
//!
//! The three public entry points differ only in what happens to the body:
//! [`ExplorerClient::send`] discards it, [`ExplorerClient::fetch`] decodes it and
//! [`ExplorerClient::fetch_raw`] copies it into a byte sink.

use std::{sync::Arc, time::Instant};

use explorer_types::{ApiVersion, v2::Envelope, v2::NodeStatus};
use reqwest::{
    Method, StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::RwLock,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
    health::HealthCheckResult,
    services::{V1, V2},
    transport::{ReqwestTransport, Transport, TransportConfig, TransportRequest, TransportResponse},
};

/// Explorer endpoint used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://dexplorer.ark.io:8443/api/";

const JSON_CONTENT_TYPE: &str = "application/json";
const API_VERSION_HEADER: HeaderName = HeaderName::from_static("api-version");

/// A logical call: version, verb, relative path and optional body
#[derive(Debug, Clone)]
pub struct ApiRequest<'a, B: ?Sized = ()> {
    /// API revision selected with the `API-Version` header
    pub version: ApiVersion,
    /// HTTP verb
    pub method: Method,
    /// Path relative to the base URL, optionally with a query string
    pub path: &'a str,
    /// Value encoded as the JSON request body
    pub body: Option<&'a B>,
}

impl<'a> ApiRequest<'a, ()> {
    /// Create a request without a body
    pub fn new(version: ApiVersion, method: Method, path: &'a str) -> Self {
        Self {
            version,
            method,
            path,
            body: None,
        }
    }

    /// Create a body-less `GET` request
    pub fn get(version: ApiVersion, path: &'a str) -> Self {
        Self::new(version, Method::GET, path)
    }
}

impl<'a, B: ?Sized> ApiRequest<'a, B> {
    /// Attach a JSON body, replacing any previous one
    pub fn with_body<C: ?Sized>(self, body: &'a C) -> ApiRequest<'a, C> {
        ApiRequest {
            version: self.version,
            method: self.method,
            path: self.path,
            body: Some(body),
        }
    }
}

/// Status and headers of a completed exchange, plus the decoded body if any
#[derive(Debug, Clone)]
pub struct ApiResponse<T = ()> {
    status: StatusCode,
    headers: HeaderMap,
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// HTTP status
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Decoded body; `None` when the body was empty or not requested
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the response, keeping the decoded body
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    fn without_body(response: &TransportResponse) -> Self {
        Self {
            status: response.status,
            headers: response.headers.clone(),
            data: None,
        }
    }
}

/// Handle to the explorer API
///
/// Holds the base URL and a swappable transport. Resource proxies returned by
/// [`ExplorerClient::v1`] and [`ExplorerClient::v2`] borrow the handle, so share
/// it behind an `Arc` when several tasks issue requests.
#[derive(Debug)]
pub struct ExplorerClient<T = ReqwestTransport> {
    base_url: Url,
    transport: RwLock<Arc<T>>,
}

impl ExplorerClient<ReqwestTransport> {
    /// Create a client for the default explorer host with the default transport
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> ClientResult<Self> {
        let transport = ReqwestTransport::new(&TransportConfig::default())?;
        Ok(Self::with_transport(transport))
    }

    /// Create a client from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be created
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config.transport_config())?;
        Self::with_transport(transport).with_base_url(&config.base_url)
    }
}

impl<T: Transport> ExplorerClient<T> {
    /// Create a client for the default explorer host using the given transport
    #[allow(clippy::missing_panics_doc)]
    pub fn with_transport(transport: T) -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            transport: RwLock::new(Arc::new(transport)),
        }
    }

    /// Point the client at another explorer
    ///
    /// Only parsing is checked here. A URL whose path lacks the trailing `/` is
    /// accepted but every request through it fails with a configuration error.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `base_url` is not an absolute URL
    pub fn with_base_url(mut self, base_url: &str) -> ClientResult<Self> {
        self.base_url = Url::parse(base_url)
            .map_err(|e| ClientError::configuration(format!("invalid base URL {base_url:?}: {e}")))?;
        Ok(self)
    }

    /// Replace the base URL
    pub fn set_base_url(&mut self, base_url: Url) {
        self.base_url = base_url;
    }

    /// The base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The transport currently used for new requests
    pub async fn transport(&self) -> Arc<T> {
        Arc::clone(&*self.transport.read().await)
    }

    /// Swap the transport
    ///
    /// Requests already in flight finish on the transport they started with.
    pub async fn replace_transport(&self, transport: T) {
        *self.transport.write().await = Arc::new(transport);
        info!(base_url = %self.base_url, "explorer transport replaced");
    }

    /// Sub-services of the first API revision
    pub fn v1(&self) -> V1<'_, T> {
        V1::new(self)
    }

    /// Sub-services of the second API revision
    pub fn v2(&self) -> V2<'_, T> {
        V2::new(self)
    }

    /// Execute a request and discard the response body
    ///
    /// # Errors
    ///
    /// Returns an error on invalid base URL, path or body, on transport failure,
    /// or if `ctx` is cancelled first
    pub async fn send<B>(
        &self,
        ctx: &CancellationToken,
        request: ApiRequest<'_, B>,
    ) -> ClientResult<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(ctx, request).await?;
        Ok(ApiResponse::without_body(&response))
    }

    /// Execute a request and decode the JSON response body into `R`
    ///
    /// An empty or whitespace-only body is not an error: the returned response
    /// carries no data.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid base URL, path or body, on transport failure,
    /// if `ctx` is cancelled first, or if a non-empty body is not valid JSON for `R`
    pub async fn fetch<B, R>(
        &self,
        ctx: &CancellationToken,
        request: ApiRequest<'_, B>,
    ) -> ClientResult<ApiResponse<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch(ctx, request).await?;
        decode(response)
    }

    /// Execute a request and copy the raw response body into `sink`
    ///
    /// # Errors
    ///
    /// Returns an error on invalid base URL, path or body, on transport failure,
    /// if `ctx` is cancelled first, or if writing to `sink` fails
    pub async fn fetch_raw<B, W>(
        &self,
        ctx: &CancellationToken,
        request: ApiRequest<'_, B>,
        sink: &mut W,
    ) -> ClientResult<ApiResponse>
    where
        B: Serialize + ?Sized,
        W: AsyncWrite + Unpin + ?Sized,
    {
        let response = self.dispatch(ctx, request).await?;
        sink.write_all(&response.body).await?;
        sink.flush().await?;
        Ok(ApiResponse::without_body(&response))
    }

    /// Probe the explorer through the node status endpoint
    ///
    /// Failures other than cancellation are reported as [`crate::HealthStatus::Down`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Cancelled`] if `ctx` is cancelled before the probe completes
    pub async fn health_check(&self, ctx: &CancellationToken) -> ClientResult<HealthCheckResult> {
        let start_time = Instant::now();
        let result = self
            .fetch::<(), Envelope<NodeStatus>>(ctx, ApiRequest::get(ApiVersion::V2, "node/status"))
            .await;
        let response_time = start_time.elapsed();

        let response = match result {
            Ok(response) => response,
            Err(ClientError::Cancelled) => return Err(ClientError::Cancelled),
            Err(error) => {
                warn!(%error, "explorer health check failed");
                return Ok(HealthCheckResult::down(response_time, error.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "explorer health check failed");
            return Ok(HealthCheckResult::down(
                response_time,
                format!("API returned status {}", status.as_u16()),
            ));
        }

        let Some(node) = response.into_data().map(Envelope::into_inner) else {
            return Ok(HealthCheckResult::down(
                response_time,
                "empty node status response",
            ));
        };

        if node.synced {
            info!(height = node.now, "explorer health check passed in {:?}", response_time);
        } else {
            warn!(height = node.now, behind = node.blocks_count, "explorer node is syncing");
        }
        Ok(HealthCheckResult::from_node(&node, response_time))
    }

    async fn dispatch<B>(
        &self,
        ctx: &CancellationToken,
        request: ApiRequest<'_, B>,
    ) -> ClientResult<TransportResponse>
    where
        B: Serialize + ?Sized,
    {
        let outbound = self.build_request(&request)?;
        let url = outbound.url.clone();

        debug!(
            method = %outbound.method,
            %url,
            version = request.version.number(),
            "sending explorer request"
        );

        let transport = self.transport().await;

        let result = tokio::select! {
            biased;
            () = ctx.cancelled() => {
                warn!(%url, "explorer request cancelled");
                return Err(ClientError::Cancelled);
            }
            result = transport.execute(outbound) => result,
        };

        match result {
            Ok(response) => {
                debug!(%url, status = response.status.as_u16(), "explorer request completed");
                Ok(response)
            }
            Err(_) if ctx.is_cancelled() => {
                warn!(%url, "explorer request cancelled");
                Err(ClientError::Cancelled)
            }
            Err(error) => {
                warn!(%url, %error, "explorer request failed");
                Err(error.into())
            }
        }
    }

    /// Resolve and encode a request without touching the network
    fn build_request<B>(&self, request: &ApiRequest<'_, B>) -> ClientResult<TransportRequest>
    where
        B: Serialize + ?Sized,
    {
        if !self.base_url.path().ends_with('/') {
            return Err(ClientError::configuration(format!(
                "base URL must have a trailing slash, but {:?} does not",
                self.base_url.as_str()
            )));
        }

        let url = self
            .base_url
            .join(request.path)
            .map_err(|source| ClientError::UrlResolution {
                path: request.path.to_string(),
                base: self.base_url.to_string(),
                source,
            })?;

        let body = request
            .body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ClientError::Serialization)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(
            API_VERSION_HEADER,
            HeaderValue::from_static(request.version.header_value()),
        );

        Ok(TransportRequest {
            method: request.method.clone(),
            url,
            headers,
            body,
        })
    }
}

fn decode<R: DeserializeOwned>(response: TransportResponse) -> ClientResult<ApiResponse<R>> {
    if response.body.trim_ascii().is_empty() {
        debug!(
            status = response.status.as_u16(),
            "empty response body, nothing to decode"
        );
        return Ok(ApiResponse::without_body(&response));
    }

    match serde_json::from_slice(&response.body) {
        Ok(data) => Ok(ApiResponse {
            status: response.status,
            headers: response.headers,
            data: Some(data),
        }),
        Err(source) => Err(ClientError::Decode {
            status: response.status,
            headers: response.headers,
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::error::TransportError;

    /// Transport that must never be reached
    #[derive(Debug)]
    struct Unreachable;

    impl Transport for Unreachable {
        async fn execute(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, TransportError> {
            Err(TransportError::custom(anyhow::anyhow!(
                "unexpected request to {}",
                request.url
            )))
        }
    }

    fn client(base_url: &str) -> ExplorerClient<Unreachable> {
        ExplorerClient::with_transport(Unreachable)
            .with_base_url(base_url)
            .unwrap()
    }

    #[test]
    fn default_base_url() {
        let client = ExplorerClient::with_transport(Unreachable);
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.base_url().port(), Some(8443));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = ExplorerClient::with_transport(Unreachable).with_base_url("not a url");
        assert!(matches!(result, Err(ClientError::Configuration { .. })));
    }

    #[test]
    fn build_resolves_against_base() {
        let client = client("https://example.com/api/");
        let request = client
            .build_request(&ApiRequest::get(ApiVersion::V2, "blocks/123"))
            .unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.as_str(), "https://example.com/api/blocks/123");
        assert_eq!(request.headers["api-version"], "2");
        assert_eq!(request.headers[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert!(request.body.is_none());
    }

    #[test]
    fn build_keeps_query_string() {
        let client = client("https://example.com/api/");
        let request = client
            .build_request(&ApiRequest::get(ApiVersion::V1, "blocks/get?id=42"))
            .unwrap();

        assert_eq!(
            request.url.as_str(),
            "https://example.com/api/blocks/get?id=42"
        );
        assert_eq!(request.headers["api-version"], "1");
    }

    #[test]
    fn build_requires_trailing_slash() {
        let client = client("https://example.com/api");
        let error = client
            .build_request(&ApiRequest::get(ApiVersion::V2, "blocks"))
            .unwrap_err();

        match error {
            ClientError::Configuration { message } => {
                assert_eq!(
                    message,
                    "base URL must have a trailing slash, but \"https://example.com/api\" does not"
                );
            }
            other => panic!("Expected Configuration error, got: {other:?}"),
        }
    }

    #[test]
    fn build_encodes_body_without_html_escaping() {
        #[derive(Serialize)]
        struct Search<'a> {
            #[serde(rename = "vendorField")]
            vendor_field: &'a str,
        }

        let client = client("https://example.com/api/");
        let body = Search {
            vendor_field: "<b>&</b>",
        };
        let request = client
            .build_request(
                &ApiRequest::new(ApiVersion::V2, Method::POST, "transactions/search")
                    .with_body(&body),
            )
            .unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.body.as_deref(),
            Some(br#"{"vendorField":"<b>&</b>"}"#.as_slice())
        );
    }

    #[test]
    fn build_reports_serialization_failure() {
        use std::collections::HashMap;

        // JSON object keys must be strings
        let body: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let client = client("https://example.com/api/");
        let error = client
            .build_request(
                &ApiRequest::new(ApiVersion::V2, Method::POST, "wallets/search").with_body(&body),
            )
            .unwrap_err();

        assert!(matches!(error, ClientError::Serialization(_)));
    }

    #[test]
    fn decode_empty_body_is_not_an_error() {
        #[derive(Debug, Deserialize)]
        struct Anything {}

        for body in ["", "  \n\t"] {
            let response = decode::<Anything>(TransportResponse::new(StatusCode::NO_CONTENT, body))
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
            assert!(response.data().is_none());
        }
    }

    #[test]
    fn decode_invalid_json_keeps_status_and_headers() {
        let mut response = TransportResponse::new(StatusCode::BAD_GATEWAY, "<html>");
        response
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));

        let error = decode::<serde_json::Value>(response).unwrap_err();

        assert!(matches!(error, ClientError::Decode { .. }));
        assert_eq!(error.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(error.headers().unwrap()[CONTENT_TYPE], "text/html");
    }

    #[tokio::test]
    async fn cancelled_before_send() {
        let client = client("https://example.com/api/");
        let token = CancellationToken::new();
        token.cancel();

        let error = client
            .send(&token, ApiRequest::get(ApiVersion::V2, "blocks"))
            .await
            .unwrap_err();
        assert!(error.is_cancelled());
    }
}
