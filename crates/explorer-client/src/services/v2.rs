// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! API v2 sub-services

use std::collections::BTreeMap;

use explorer_types::{
    ApiVersion,
    v2::{
        Block, Delegate, Envelope, NodeConfiguration, NodeStatus, NodeSyncing, Paginated, Peer,
        Transaction, Wallet,
    },
};
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::{
    client::ApiResponse,
    error::ClientResult,
    query::{Query, Route, encode_segment},
    resource::{Collection, Resource, ResourceProxy, Searchable, nested_route},
    transport::Transport,
};

macro_rules! v2_collection {
    ($(#[$doc:meta])* $name:ident, $path:literal, $item:ty $(, $searchable:ident)?) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl Resource for $name {
            const VERSION: ApiVersion = ApiVersion::V2;
            const PATH: &'static str = $path;
        }

        impl Collection for $name {
            type Item = $item;
            type Listing = Paginated<$item>;
            type Single = Envelope<$item>;

            fn item_route(id: &str) -> Route {
                nested_route($path, id)
            }
        }

        $(impl $searchable for $name {})?
    };
}

v2_collection!(
    /// `blocks`
    Blocks, "blocks", Block, Searchable
);
v2_collection!(
    /// `delegates`, addressed by username, address or public key
    Delegates, "delegates", Delegate, Searchable
);
v2_collection!(
    /// `peers`, addressed by IP address
    Peers, "peers", Peer
);
v2_collection!(
    /// `transactions`
    Transactions, "transactions", Transaction, Searchable
);
v2_collection!(
    /// `votes`, the vote transactions
    Votes, "votes", Transaction, Searchable
);
v2_collection!(
    /// `wallets`, addressed by address, public key or username
    Wallets, "wallets", Wallet, Searchable
);

/// `node`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node;

impl Resource for Node {
    const VERSION: ApiVersion = ApiVersion::V2;
    const PATH: &'static str = "node";
}

impl<T: Transport> ResourceProxy<'_, T, Blocks> {
    /// Transactions contained in a block
    pub async fn transactions(
        &self,
        ctx: &CancellationToken,
        id: &str,
        query: &Query,
    ) -> ClientResult<ApiResponse<Paginated<Transaction>>> {
        self.related(ctx, id, "transactions", query).await
    }
}

impl<T: Transport> ResourceProxy<'_, T, Delegates> {
    /// Blocks forged by a delegate
    pub async fn blocks(
        &self,
        ctx: &CancellationToken,
        id: &str,
        query: &Query,
    ) -> ClientResult<ApiResponse<Paginated<Block>>> {
        self.related(ctx, id, "blocks", query).await
    }

    /// Wallets voting for a delegate
    pub async fn voters(
        &self,
        ctx: &CancellationToken,
        id: &str,
        query: &Query,
    ) -> ClientResult<ApiResponse<Paginated<Wallet>>> {
        self.related(ctx, id, "voters", query).await
    }
}

impl<T: Transport> ResourceProxy<'_, T, Node> {
    /// Whether the node is in sync with the network
    pub async fn status(
        &self,
        ctx: &CancellationToken,
    ) -> ClientResult<ApiResponse<Envelope<NodeStatus>>> {
        self.fetch(ctx, "status", &Query::new()).await
    }

    /// Synchronisation progress
    pub async fn syncing(
        &self,
        ctx: &CancellationToken,
    ) -> ClientResult<ApiResponse<Envelope<NodeSyncing>>> {
        self.fetch(ctx, "syncing", &Query::new()).await
    }

    /// Network parameters
    pub async fn configuration(
        &self,
        ctx: &CancellationToken,
    ) -> ClientResult<ApiResponse<Envelope<NodeConfiguration>>> {
        self.fetch(ctx, "configuration", &Query::new()).await
    }
}

impl<T: Transport> ResourceProxy<'_, T, Transactions> {
    /// Transactions waiting in the pool
    pub async fn unconfirmed(
        &self,
        ctx: &CancellationToken,
        query: &Query,
    ) -> ClientResult<ApiResponse<Paginated<Transaction>>> {
        self.fetch(ctx, "unconfirmed", query).await
    }

    /// One pooled transaction
    pub async fn unconfirmed_by_id(
        &self,
        ctx: &CancellationToken,
        id: &str,
    ) -> ClientResult<ApiResponse<Envelope<Transaction>>> {
        self.fetch(ctx, &format!("unconfirmed/{}", encode_segment(id)), &Query::new())
            .await
    }

    /// Transaction type codes keyed by name
    pub async fn types(
        &self,
        ctx: &CancellationToken,
    ) -> ClientResult<ApiResponse<Envelope<BTreeMap<String, u8>>>> {
        self.fetch(ctx, "types", &Query::new()).await
    }

    /// Submit signed transactions to the pool
    ///
    /// The node answers with per-transaction acceptance details whose shape varies
    /// between node versions, so the body is returned undecoded into a struct.
    pub async fn create<B>(
        &self,
        ctx: &CancellationToken,
        body: &B,
    ) -> ClientResult<ApiResponse<Value>>
    where
        B: Serialize + ?Sized,
    {
        self.post_route(ctx, &Route::new(Transactions::PATH), body)
            .await
    }
}

impl<T: Transport> ResourceProxy<'_, T, Wallets> {
    /// Wallets with the highest balances
    pub async fn top(
        &self,
        ctx: &CancellationToken,
        query: &Query,
    ) -> ClientResult<ApiResponse<Paginated<Wallet>>> {
        self.fetch(ctx, "top", query).await
    }

    /// All transactions involving a wallet
    pub async fn transactions(
        &self,
        ctx: &CancellationToken,
        id: &str,
        query: &Query,
    ) -> ClientResult<ApiResponse<Paginated<Transaction>>> {
        self.related(ctx, id, "transactions", query).await
    }

    /// Transactions sent by a wallet
    pub async fn sent(
        &self,
        ctx: &CancellationToken,
        id: &str,
        query: &Query,
    ) -> ClientResult<ApiResponse<Paginated<Transaction>>> {
        self.related(ctx, id, "transactions/sent", query).await
    }

    /// Transactions received by a wallet
    pub async fn received(
        &self,
        ctx: &CancellationToken,
        id: &str,
        query: &Query,
    ) -> ClientResult<ApiResponse<Paginated<Transaction>>> {
        self.related(ctx, id, "transactions/received", query).await
    }

    /// Votes cast by a wallet
    pub async fn votes(
        &self,
        ctx: &CancellationToken,
        id: &str,
        query: &Query,
    ) -> ClientResult<ApiResponse<Paginated<Transaction>>> {
        self.related(ctx, id, "votes", query).await
    }
}
