// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration
//!
//! Configuration is layered with the `config` crate, later sources overriding
//! earlier ones:
//!
//! 1. default values,
//! 2. an optional JSON file (`explorer-client.json` unless another path is given),
//! 3. environment variables prefixed with `ARK_EXPLORER_`, for example
//!    `ARK_EXPLORER_BASE_URL` or `ARK_EXPLORER_TIMEOUT_SECONDS`.
//!
//! The dispatcher never reads the environment itself; callers opt in by loading a
//! [`ClientConfig`] and passing it to [`crate::ExplorerClient::from_config`].

use std::{path::Path, time::Duration};

use anyhow::{Result, ensure};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer, Serialize, de};
use url::Url;

use crate::{
    client::DEFAULT_BASE_URL,
    error::{ClientError, ClientResult},
    transport::TransportConfig,
};

const DEFAULT_CONFIG_FILE: &str = "explorer-client.json";
const ENV_PREFIX: &str = "ARK_EXPLORER";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const MAX_TIMEOUT_SECONDS: u64 = 300;

/// A validated request timeout in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeoutSeconds(u64);

impl TimeoutSeconds {
    /// Create a new `TimeoutSeconds`, ensuring the value is within valid bounds
    ///
    /// # Errors
    ///
    /// Returns an error if timeout is 0 or greater than 300 seconds
    pub fn new(seconds: u64) -> Result<Self> {
        ensure!(seconds != 0, "timeout must be greater than 0");
        ensure!(
            seconds <= MAX_TIMEOUT_SECONDS,
            "timeout cannot exceed {MAX_TIMEOUT_SECONDS}"
        );
        Ok(Self(seconds))
    }

    /// Get the timeout as a duration
    pub fn value(&self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for TimeoutSeconds {
    fn default() -> Self {
        Self(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl<'de> Deserialize<'de> for TimeoutSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Self::new(seconds).map_err(|e| de::Error::custom(e.to_string()))
    }
}

/// Settings needed to build an [`crate::ExplorerClient`] with the default transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Explorer API root; must end with `/`
    pub base_url: String,
    /// Whole-request timeout enforced by the transport
    pub timeout_seconds: TimeoutSeconds,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let transport = TransportConfig::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: TimeoutSeconds::default(),
            user_agent: transport.user_agent,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `explorer-client.json` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if configuration is invalid or cannot be loaded.
    pub fn from_env() -> ClientResult<Self> {
        Self::load(None).map_err(|e| {
            ClientError::configuration(format!("failed to load configuration: {e}"))
        })
    }

    /// Load configuration from an explicit file (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if configuration is invalid or cannot be loaded.
    pub fn from_file(path: impl AsRef<Path>) -> ClientResult<Self> {
        Self::load(Some(path.as_ref())).map_err(|e| {
            ClientError::configuration(format!("failed to load configuration: {e}"))
        })
    }

    /// Build the layered configuration and validate the result
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or the result is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let file = match path {
            Some(path) => File::from(path),
            None => File::with_name(DEFAULT_CONFIG_FILE),
        };

        let config = Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?
            .set_default("user_agent", defaults.user_agent)?
            .add_source(file.required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let client_config: Self = config.try_deserialize()?;
        client_config
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(client_config)
    }

    /// Check that the base URL parses and ends with `/`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` describing the first problem found.
    pub fn validate(&self) -> ClientResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::configuration(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;

        if !url.path().ends_with('/') {
            return Err(ClientError::configuration(format!(
                "base URL must have a trailing slash, but {:?} does not",
                self.base_url
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ClientError::configuration("user agent cannot be empty"));
        }

        Ok(())
    }

    /// Settings for the default transport
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout_seconds.value(),
            user_agent: self.user_agent.clone(),
        }
    }
}
