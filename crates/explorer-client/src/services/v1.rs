// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! API v1 sub-services
//!
//! v1 looks single items up through `{path}/get` with a query parameter. Accounts
//! are the exception: v1 has no account listing, so [`Accounts`] is not a
//! [`Collection`] and its lookup is `accounts?address=...`.

use explorer_types::{
    ApiVersion,
    v1::{
        Account, AccountBalance, AccountPublicKey, Block, BlockHeight, Delegate, DelegateCount,
        Fee, ForgedTotals, Listing, LoaderStatus, Peer, PeerVersion, Single, SyncStatus,
        Transaction,
    },
};
use tokio_util::sync::CancellationToken;

use crate::{
    client::ApiResponse,
    error::ClientResult,
    query::{Query, Route},
    resource::{Collection, Resource, ResourceProxy, lookup_route},
    transport::Transport,
};

macro_rules! v1_collection {
    ($(#[$doc:meta])* $name:ident, $path:literal, $item:ty, |$id:ident| $route:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl Resource for $name {
            const VERSION: ApiVersion = ApiVersion::V1;
            const PATH: &'static str = $path;
        }

        impl Collection for $name {
            type Item = $item;
            type Listing = Listing<$item>;
            type Single = Single<$item>;

            fn item_route($id: &str) -> Route {
                $route
            }
        }
    };
}

v1_collection!(
    /// `blocks`
    Blocks, "blocks", Block,
    |id| lookup_route(Blocks::PATH, "id", id)
);
v1_collection!(
    /// `delegates`, looked up by username
    Delegates, "delegates", Delegate,
    |id| lookup_route(Delegates::PATH, "username", id)
);
v1_collection!(
    /// `peers`, looked up by IP address
    Peers, "peers", Peer,
    |id| lookup_route(Peers::PATH, "ip", id)
);
v1_collection!(
    /// `transactions`
    Transactions, "transactions", Transaction,
    |id| lookup_route(Transactions::PATH, "id", id)
);

/// `accounts`, addressed by wallet address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accounts;

impl Resource for Accounts {
    const VERSION: ApiVersion = ApiVersion::V1;
    const PATH: &'static str = "accounts";
}

/// `loader`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loader;

impl Resource for Loader {
    const VERSION: ApiVersion = ApiVersion::V1;
    const PATH: &'static str = "loader";
}

/// `signatures`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signatures;

impl Resource for Signatures {
    const VERSION: ApiVersion = ApiVersion::V1;
    const PATH: &'static str = "signatures";
}

impl<T: Transport> ResourceProxy<'_, T, Accounts> {
    /// `GET accounts?address=`
    pub async fn get(
        &self,
        ctx: &CancellationToken,
        address: &str,
    ) -> ClientResult<ApiResponse<Single<Account>>> {
        let route = Route::new(Accounts::PATH).param("address", address);
        self.get_route(ctx, &route).await
    }

    /// `GET accounts/getBalance?address=`
    pub async fn balance(
        &self,
        ctx: &CancellationToken,
        address: &str,
    ) -> ClientResult<ApiResponse<AccountBalance>> {
        let route = Route::new("accounts/getBalance").param("address", address);
        self.get_route(ctx, &route).await
    }

    /// `GET accounts/getPublicKey?address=`
    pub async fn public_key(
        &self,
        ctx: &CancellationToken,
        address: &str,
    ) -> ClientResult<ApiResponse<AccountPublicKey>> {
        let route = Route::new("accounts/getPublicKey").param("address", address);
        self.get_route(ctx, &route).await
    }

    /// Delegates the account votes for
    pub async fn delegates(
        &self,
        ctx: &CancellationToken,
        address: &str,
    ) -> ClientResult<ApiResponse<Listing<Delegate>>> {
        let route = Route::new("accounts/delegates").param("address", address);
        self.get_route(ctx, &route).await
    }
}

impl<T: Transport> ResourceProxy<'_, T, Blocks> {
    /// Current chain height
    pub async fn height(&self, ctx: &CancellationToken) -> ClientResult<ApiResponse<BlockHeight>> {
        self.fetch(ctx, "getHeight", &Query::new()).await
    }

    /// Current transfer fee
    pub async fn fee(&self, ctx: &CancellationToken) -> ClientResult<ApiResponse<Fee>> {
        self.fetch(ctx, "getFee", &Query::new()).await
    }
}

impl<T: Transport> ResourceProxy<'_, T, Delegates> {
    /// Number of registered delegates
    pub async fn count(&self, ctx: &CancellationToken) -> ClientResult<ApiResponse<DelegateCount>> {
        self.fetch(ctx, "count", &Query::new()).await
    }

    /// Delegates whose username matches `q`
    pub async fn search_by_name(
        &self,
        ctx: &CancellationToken,
        q: &str,
        query: &Query,
    ) -> ClientResult<ApiResponse<Listing<Delegate>>> {
        self.fetch(ctx, "search", &query.clone().param("q", q)).await
    }

    /// Accounts voting for the delegate
    pub async fn voters(
        &self,
        ctx: &CancellationToken,
        public_key: &str,
    ) -> ClientResult<ApiResponse<Listing<Account>>> {
        self.fetch(ctx, "voters", &Query::new().param("publicKey", public_key))
            .await
    }

    /// Fees and rewards forged by the delegate
    pub async fn forged_by_account(
        &self,
        ctx: &CancellationToken,
        public_key: &str,
    ) -> ClientResult<ApiResponse<ForgedTotals>> {
        self.fetch(
            ctx,
            "forging/getForgedByAccount",
            &Query::new().param("generatorPublicKey", public_key),
        )
        .await
    }
}

impl<T: Transport> ResourceProxy<'_, T, Loader> {
    /// Blockchain loading state
    pub async fn status(&self, ctx: &CancellationToken) -> ClientResult<ApiResponse<LoaderStatus>> {
        self.fetch(ctx, "status", &Query::new()).await
    }

    /// Synchronisation state
    pub async fn sync_status(
        &self,
        ctx: &CancellationToken,
    ) -> ClientResult<ApiResponse<SyncStatus>> {
        self.fetch(ctx, "status/sync", &Query::new()).await
    }
}

impl<T: Transport> ResourceProxy<'_, T, Peers> {
    /// Look a peer up by address and port
    pub async fn get_by_address(
        &self,
        ctx: &CancellationToken,
        ip: &str,
        port: u16,
    ) -> ClientResult<ApiResponse<Single<Peer>>> {
        let route = lookup_route(Peers::PATH, "ip", ip).param("port", port);
        self.get_route(ctx, &route).await
    }

    /// Software version of the queried node
    ///
    /// Named apart from [`ResourceProxy::version`], which reports the API revision.
    pub async fn node_version(
        &self,
        ctx: &CancellationToken,
    ) -> ClientResult<ApiResponse<PeerVersion>> {
        self.fetch(ctx, "version", &Query::new()).await
    }
}

impl<T: Transport> ResourceProxy<'_, T, Signatures> {
    /// Fee for registering a second signature
    pub async fn fee(&self, ctx: &CancellationToken) -> ClientResult<ApiResponse<Fee>> {
        self.fetch(ctx, "fee", &Query::new()).await
    }
}

impl<T: Transport> ResourceProxy<'_, T, Transactions> {
    /// Transactions waiting in the pool
    pub async fn unconfirmed(
        &self,
        ctx: &CancellationToken,
        query: &Query,
    ) -> ClientResult<ApiResponse<Listing<Transaction>>> {
        self.fetch(ctx, "unconfirmed", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_routes() {
        assert_eq!(Blocks::item_route("42").to_string(), "blocks/get?id=42");
        assert_eq!(
            Delegates::item_route("arkpool").to_string(),
            "delegates/get?username=arkpool"
        );
        assert_eq!(
            Peers::item_route("10.0.0.1").to_string(),
            "peers/get?ip=10.0.0.1"
        );
        assert_eq!(
            Transactions::item_route("f1").to_string(),
            "transactions/get?id=f1"
        );
    }

    #[test]
    fn every_service_targets_v1() {
        assert_eq!(Accounts::VERSION, ApiVersion::V1);
        assert_eq!(Loader::VERSION, ApiVersion::V1);
        assert_eq!(Signatures::PATH, "signatures");
    }
}
