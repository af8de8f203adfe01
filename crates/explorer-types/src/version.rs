// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Explorer API revisions
//!
//! The explorer serves two incompatible response schemas from the same host. The
//! revision is selected per request with the `API-Version` header.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Revision of the explorer API a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// Legacy `success`-flagged responses
    V1 = 1,
    /// Paginated `data`/`meta` responses
    V2 = 2,
}

/// Errors produced when turning user input into an [`ApiVersion`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiVersionParseError {
    /// The number does not name a known revision
    #[error("unsupported API version: {0}")]
    Unsupported(u64),
    /// The input is not a number
    #[error("invalid API version: {0:?}")]
    Invalid(String),
}

impl ApiVersion {
    /// Name of the request header that carries the revision
    pub const HEADER: &'static str = "API-Version";

    /// Returns the numeric revision
    pub const fn number(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// Returns the revision formatted for the `API-Version` header
    pub const fn header_value(self) -> &'static str {
        match self {
            Self::V1 => "1",
            Self::V2 => "2",
        }
    }

    /// Returns all known revisions, oldest first
    pub const fn all() -> &'static [Self] {
        &[Self::V1, Self::V2]
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_value())
    }
}

impl TryFrom<u64> for ApiVersion {
    type Error = ApiVersionParseError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(ApiVersionParseError::Unsupported(other)),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ApiVersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let number = trimmed
            .parse::<u64>()
            .map_err(|_| ApiVersionParseError::Invalid(s.to_string()))?;
        Self::try_from(number)
    }
}

impl From<ApiVersion> for u8 {
    fn from(version: ApiVersion) -> Self {
        version.number()
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = u64::deserialize(deserializer)?;
        Self::try_from(number).map_err(serde::de::Error::custom)
    }
}
