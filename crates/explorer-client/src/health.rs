// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Explorer health derived from the node synchronisation state

use std::time::Duration;

use chrono::{DateTime, Utc};
use explorer_types::v2::NodeStatus;
use serde::{Deserialize, Serialize};

/// Health of the explorer as seen by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum HealthStatus {
    /// Node behind the explorer is in sync with the network
    Up { height: u64 },
    /// Explorer answers but its node is still catching up
    Degraded { height: u64, blocks_behind: i64 },
    /// Explorer is unreachable or answered with an error
    Down { reason: String },
}

impl HealthStatus {
    /// Classify a node status report
    pub fn from_node(node: &NodeStatus) -> Self {
        if node.synced {
            Self::Up { height: node.now }
        } else {
            Self::Degraded {
                height: node.now,
                blocks_behind: node.blocks_count,
            }
        }
    }

    /// Whether the explorer can serve requests, possibly with stale data
    pub fn is_available(&self) -> bool {
        !self.is_down()
    }

    /// Whether the explorer is unusable
    pub fn is_down(&self) -> bool {
        matches!(self, Self::Down { .. })
    }

    /// Chain height reported by the node, unless the explorer is down
    pub fn height(&self) -> Option<u64> {
        match self {
            Self::Up { height } | Self::Degraded { height, .. } => Some(*height),
            Self::Down { .. } => None,
        }
    }

    /// Human-readable description of the status
    pub fn description(&self) -> String {
        match self {
            Self::Up { height } => format!("node synced at height {height}"),
            Self::Degraded { blocks_behind, .. } => {
                format!("node is syncing, {blocks_behind} blocks behind")
            }
            Self::Down { reason } => reason.clone(),
        }
    }
}

/// Outcome of a single health probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// The health status
    pub status: HealthStatus,
    /// Time the probe took
    pub response_time: Duration,
    /// When the probe finished
    pub timestamp: DateTime<Utc>,
}

impl HealthCheckResult {
    /// Result of a probe that finished now
    pub fn new(status: HealthStatus, response_time: Duration) -> Self {
        Self {
            status,
            response_time,
            timestamp: Utc::now(),
        }
    }

    /// A probe that received a node status report
    pub fn from_node(node: &NodeStatus, response_time: Duration) -> Self {
        Self::new(HealthStatus::from_node(node), response_time)
    }

    /// A failed probe
    pub fn down(response_time: Duration, reason: impl Into<String>) -> Self {
        Self::new(
            HealthStatus::Down {
                reason: reason.into(),
            },
            response_time,
        )
    }
}
