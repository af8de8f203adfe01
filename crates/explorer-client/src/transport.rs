// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport seam
//!
//! The dispatcher builds a [`TransportRequest`] and hands it to a [`Transport`],
//! which performs exactly one round-trip and returns the full response body.
//! [`ReqwestTransport`] is the default implementation; tests and embedders can
//! supply their own.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, Method, StatusCode, header::HeaderMap};
use tracing::debug;
use url::Url;

use crate::error::{ClientError, ClientResult, TransportError};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("ark-explorer-client/", env!("CARGO_PKG_VERSION"));

/// Something that can execute one HTTP request
///
/// Implementations must read the response body to completion so that the
/// underlying connection is released before `execute` returns.
pub trait Transport: Send + Sync {
    /// Execute the request and return the response with its full body
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the body could not be read
    fn execute(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// A fully resolved outbound request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Encoded request body
    pub body: Option<Vec<u8>>,
}

/// A response with its body already read
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a response with no headers
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Settings for the default transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Transport backed by a `reqwest` client
///
/// Connection pooling, TLS and timeouts are whatever the wrapped client does.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport from the given settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(config: &TransportConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wrap a pre-configured `reqwest` client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// The wrapped `reqwest` client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let TransportRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, url.clone()).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|error| request_error(&url, error))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|error| TransportError::Body {
                url: normalized_url(&url, &error),
                source: error.without_url(),
            })?;

        debug!(%url, status = status.as_u16(), bytes = body.len(), "response body read");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

fn request_error(url: &Url, error: reqwest::Error) -> TransportError {
    TransportError::Request {
        url: normalized_url(url, &error),
        source: error.without_url(),
    }
}

/// Prefer the URL reqwest reports (it may differ after redirects), re-parsed so it
/// prints in canonical form
fn normalized_url(requested: &Url, error: &reqwest::Error) -> Url {
    error
        .url()
        .and_then(|reported| Url::parse(reported.as_str()).ok())
        .unwrap_or_else(|| requested.clone())
}
