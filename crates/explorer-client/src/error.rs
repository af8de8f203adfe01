// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for explorer requests
//!
//! Every failure is returned to the immediate caller. Nothing is retried or
//! recovered internally. HTTP error statuses are not errors at this level: they
//! are reported through [`crate::ApiResponse::status`].

use reqwest::{StatusCode, header::HeaderMap};
use thiserror::Error;
use url::Url;

/// Result type alias for explorer client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while dispatching a request to the explorer
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ClientError {
    /// Base URL or configuration is malformed; raised before any I/O
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Relative path cannot be joined onto the base URL
    #[error("failed to resolve {path:?} against {base}: {source}")]
    UrlResolution {
        path: String,
        base: String,
        #[source]
        source: url::ParseError,
    },

    /// Request body cannot be encoded as JSON
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Caller cancelled the request
    #[error("request cancelled")]
    Cancelled,

    /// Network, DNS or TLS failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response body is not valid JSON for the requested type
    #[error("failed to decode response with status {status}: {source}")]
    Decode {
        status: StatusCode,
        headers: HeaderMap,
        #[source]
        source: serde_json::Error,
    },

    /// Raw response body could not be written to the caller's sink
    #[error("failed to write response body: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the request was abandoned because the caller cancelled it
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// HTTP status of the response, when one was received before the failure
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Headers of the response, when one was received before the failure
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            Self::Decode { headers, .. } => Some(headers),
            _ => None,
        }
    }
}

/// Errors raised by a [`crate::Transport`] while executing a request
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum TransportError {
    /// Sending the request or receiving the response head failed
    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// Reading the response body failed
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// Failure reported by a third-party transport
    #[error(transparent)]
    Custom { error: anyhow::Error },
}

impl TransportError {
    /// Wrap an arbitrary failure from a custom transport
    pub fn custom(error: impl Into<anyhow::Error>) -> Self {
        Self::Custom {
            error: error.into(),
        }
    }

    /// URL of the failed request, if the transport reported one
    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Request { url, .. } | Self::Body { url, .. } => Some(url),
            Self::Custom { .. } => None,
        }
    }

    /// Whether the failure was a timeout enforced by the transport
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request { source, .. } | Self::Body { source, .. } => source.is_timeout(),
            Self::Custom { .. } => false,
        }
    }
}
