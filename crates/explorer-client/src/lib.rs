// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Async client for the ARK blockchain explorer API
//!
//! This crate talks to an explorer that serves two incompatible API revisions from
//! the same host, selected per request with the `API-Version` header.
//!
//! # Core Abstractions
//!
//! - **`ExplorerClient`**: Owns the base URL and a swappable transport, and routes
//!   every call through a single dispatcher
//! - **`Transport` Trait**: One HTTP round-trip; `ReqwestTransport` by default,
//!   replaceable for tests or custom HTTP stacks
//! - **`ResourceProxy`**: Zero-cost view of the client scoped to one sub-service,
//!   reached through [`ExplorerClient::v1`] and [`ExplorerClient::v2`]
//! - **Error Handling**: `ClientError` separates configuration, encoding, transport,
//!   decoding and cancellation failures
//!
//! # Key Features
//!
//! - **Cancellation**: Every call takes a `CancellationToken` and returns
//!   `ClientError::Cancelled` as soon as it fires
//! - **No Hidden Policy**: No retries, caching or rate limiting; a non-2xx status is
//!   returned to the caller, not turned into an error
//! - **Health Monitoring**: `health_check` reports `Up`, `Degraded` or `Down` from the
//!   node status endpoint
//! - **Layered Configuration**: `ClientConfig` merges defaults, a JSON file and
//!   `ARK_EXPLORER_*` environment variables
//!
//! # Example
//!
//! ```no_run
//! use explorer_client::{CancellationToken, ExplorerClient, Query};
//!
//! # async fn run() -> explorer_client::ClientResult<()> {
//! let client = ExplorerClient::new()?;
//! let ctx = CancellationToken::new();
//!
//! let blocks = client.v2().blocks().list(&ctx, &Query::new().limit(10)).await?;
//! if let Some(page) = blocks.data() {
//!     for block in &page.data {
//!         println!("{} at height {}", block.id, block.height);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod health;
pub mod query;
pub mod resource;
pub mod services;
pub mod transport;

pub use client::{ApiRequest, ApiResponse, DEFAULT_BASE_URL, ExplorerClient};
pub use config::{ClientConfig, TimeoutSeconds};
pub use error::{ClientError, ClientResult, TransportError};
pub use explorer_types::{self, ApiVersion};
pub use health::{HealthCheckResult, HealthStatus};
pub use query::{Query, Route, encode_segment};
pub use resource::{Collection, Resource, ResourceProxy, Searchable};
pub use services::{V1, V2};
pub use tokio_util::sync::CancellationToken;
pub use transport::{
    ReqwestTransport, Transport, TransportConfig, TransportRequest, TransportResponse,
};
