// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the Ark explorer client
//!
//! This crate holds the API version selector and the JSON shapes returned by the
//! explorer's two API revisions, kept apart from the HTTP plumbing so they can be
//! reused without pulling in a transport.

pub mod v1;
pub mod v2;
pub mod version;

pub use version::{ApiVersion, ApiVersionParseError};
