// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Explorer sub-services, grouped by API revision

pub mod v1;
pub mod v2;

use crate::{client::ExplorerClient, resource::ResourceProxy};

/// Sub-services of the first API revision
#[derive(Debug)]
pub struct V1<'c, T> {
    client: &'c ExplorerClient<T>,
}

impl<'c, T> V1<'c, T> {
    pub(crate) fn new(client: &'c ExplorerClient<T>) -> Self {
        Self { client }
    }

    /// `accounts`
    pub fn accounts(&self) -> ResourceProxy<'c, T, v1::Accounts> {
        ResourceProxy::new(self.client)
    }

    /// `blocks`
    pub fn blocks(&self) -> ResourceProxy<'c, T, v1::Blocks> {
        ResourceProxy::new(self.client)
    }

    /// `delegates`
    pub fn delegates(&self) -> ResourceProxy<'c, T, v1::Delegates> {
        ResourceProxy::new(self.client)
    }

    /// `loader`
    pub fn loader(&self) -> ResourceProxy<'c, T, v1::Loader> {
        ResourceProxy::new(self.client)
    }

    /// `peers`
    pub fn peers(&self) -> ResourceProxy<'c, T, v1::Peers> {
        ResourceProxy::new(self.client)
    }

    /// `signatures`
    pub fn signatures(&self) -> ResourceProxy<'c, T, v1::Signatures> {
        ResourceProxy::new(self.client)
    }

    /// `transactions`
    pub fn transactions(&self) -> ResourceProxy<'c, T, v1::Transactions> {
        ResourceProxy::new(self.client)
    }
}

/// Sub-services of the second API revision
#[derive(Debug)]
pub struct V2<'c, T> {
    client: &'c ExplorerClient<T>,
}

impl<'c, T> V2<'c, T> {
    pub(crate) fn new(client: &'c ExplorerClient<T>) -> Self {
        Self { client }
    }

    /// `blocks`
    pub fn blocks(&self) -> ResourceProxy<'c, T, v2::Blocks> {
        ResourceProxy::new(self.client)
    }

    /// `delegates`
    pub fn delegates(&self) -> ResourceProxy<'c, T, v2::Delegates> {
        ResourceProxy::new(self.client)
    }

    /// `node`
    pub fn node(&self) -> ResourceProxy<'c, T, v2::Node> {
        ResourceProxy::new(self.client)
    }

    /// `peers`
    pub fn peers(&self) -> ResourceProxy<'c, T, v2::Peers> {
        ResourceProxy::new(self.client)
    }

    /// `transactions`
    pub fn transactions(&self) -> ResourceProxy<'c, T, v2::Transactions> {
        ResourceProxy::new(self.client)
    }

    /// `votes`
    pub fn votes(&self) -> ResourceProxy<'c, T, v2::Votes> {
        ResourceProxy::new(self.client)
    }

    /// `wallets`
    pub fn wallets(&self) -> ResourceProxy<'c, T, v2::Wallets> {
        ResourceProxy::new(self.client)
    }
}
