// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Generic resource proxy
//!
//! Every explorer sub-service is a [`ResourceProxy`] specialised by a zero-sized
//! marker type. The marker fixes the API revision, the path under the API root and
//! the response shapes. Resource-specific endpoints are inherent methods on the
//! specialised proxy, see [`crate::services`].

use std::{fmt, marker::PhantomData};

use explorer_types::ApiVersion;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;

use crate::{
    client::{ApiRequest, ApiResponse, ExplorerClient},
    error::ClientResult,
    query::{Query, Route, encode_segment},
    transport::Transport,
};

/// A sub-service of the explorer API
pub trait Resource {
    /// API revision the sub-service belongs to
    const VERSION: ApiVersion;
    /// Path of the sub-service under the API root, without slashes
    const PATH: &'static str;
}

/// A sub-service exposing a listable, addressable collection
pub trait Collection: Resource {
    /// One element of the collection
    type Item: DeserializeOwned;
    /// Response shape of a listing
    type Listing: DeserializeOwned;
    /// Response shape of a single-item lookup
    type Single: DeserializeOwned;

    /// Route that looks up one element
    fn item_route(id: &str) -> Route;
}

/// A collection that accepts `POST {path}/search`
pub trait Searchable: Collection {}

/// Lookup route used by v2 collections: `{path}/{id}`, with `id` escaped
pub fn nested_route(path: &str, id: &str) -> Route {
    Route::new(format!("{path}/{}", encode_segment(id)))
}

/// Lookup route used by most v1 collections: `{path}/get?{key}={id}`
pub fn lookup_route(path: &str, key: &str, id: &str) -> Route {
    Route::new(format!("{path}/get")).param(key, id)
}

/// `{path}/{sub}`, or the collection root when `sub` is empty
fn sub_route<R: Resource>(sub: &str) -> Route {
    if sub.is_empty() {
        Route::new(R::PATH)
    } else {
        Route::new(format!("{}/{sub}", R::PATH))
    }
}

/// Lightweight view of an [`ExplorerClient`] scoped to one sub-service
pub struct ResourceProxy<'c, T, R> {
    client: &'c ExplorerClient<T>,
    resource: PhantomData<fn() -> R>,
}

impl<'c, T, R> ResourceProxy<'c, T, R> {
    pub(crate) fn new(client: &'c ExplorerClient<T>) -> Self {
        Self {
            client,
            resource: PhantomData,
        }
    }
}

impl<T, R> Clone for ResourceProxy<'_, T, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, R> Copy for ResourceProxy<'_, T, R> {}

impl<T, R: Resource> fmt::Debug for ResourceProxy<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceProxy")
            .field("version", &R::VERSION)
            .field("path", &R::PATH)
            .finish_non_exhaustive()
    }
}

impl<'c, T: Transport, R: Resource> ResourceProxy<'c, T, R> {
    /// The client this proxy borrows
    pub fn client(&self) -> &'c ExplorerClient<T> {
        self.client
    }

    /// API revision of the sub-service
    pub fn version(&self) -> ApiVersion {
        R::VERSION
    }

    /// Path of the sub-service under the API root
    pub fn path(&self) -> &'static str {
        R::PATH
    }

    /// `GET {path}/{sub}` decoded into `S`
    pub async fn fetch<S: DeserializeOwned>(
        &self,
        ctx: &CancellationToken,
        sub: &str,
        query: &Query,
    ) -> ClientResult<ApiResponse<S>> {
        let route = sub_route::<R>(sub).with_query(query.clone());
        self.get_route(ctx, &route).await
    }

    /// `GET {path}/{sub}` copied verbatim into `sink`
    pub async fn fetch_raw<W>(
        &self,
        ctx: &CancellationToken,
        sub: &str,
        query: &Query,
        sink: &mut W,
    ) -> ClientResult<ApiResponse>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let path = sub_route::<R>(sub).with_query(query.clone()).to_string();

        self.client
            .fetch_raw(ctx, ApiRequest::get(R::VERSION, &path), sink)
            .await
    }

    pub(crate) async fn get_route<S: DeserializeOwned>(
        &self,
        ctx: &CancellationToken,
        route: &Route,
    ) -> ClientResult<ApiResponse<S>> {
        let path = route.to_string();
        self.client
            .fetch(ctx, ApiRequest::get(R::VERSION, &path))
            .await
    }

    pub(crate) async fn post_route<B, S>(
        &self,
        ctx: &CancellationToken,
        route: &Route,
        body: &B,
    ) -> ClientResult<ApiResponse<S>>
    where
        B: Serialize + ?Sized,
        S: DeserializeOwned,
    {
        let path = route.to_string();
        let request = ApiRequest::new(R::VERSION, Method::POST, &path).with_body(body);
        self.client.fetch(ctx, request).await
    }
}

impl<T: Transport, R: Collection> ResourceProxy<'_, T, R> {
    /// `GET {path}?{query}`
    pub async fn list(
        &self,
        ctx: &CancellationToken,
        query: &Query,
    ) -> ClientResult<ApiResponse<R::Listing>> {
        let route = Route::new(R::PATH).with_query(query.clone());
        self.get_route(ctx, &route).await
    }

    /// Look up one element by identifier
    pub async fn get(
        &self,
        ctx: &CancellationToken,
        id: &str,
    ) -> ClientResult<ApiResponse<R::Single>> {
        self.get_route(ctx, &R::item_route(id)).await
    }

    /// `GET {path}/{id}/{relation}` decoded into `S`, with `id` escaped
    pub async fn related<S: DeserializeOwned>(
        &self,
        ctx: &CancellationToken,
        id: &str,
        relation: &str,
        query: &Query,
    ) -> ClientResult<ApiResponse<S>> {
        let route = nested_route(R::PATH, id);
        let route = Route::new(format!("{}/{relation}", route.path())).with_query(query.clone());
        self.get_route(ctx, &route).await
    }
}

impl<T: Transport, R: Searchable> ResourceProxy<'_, T, R> {
    /// `POST {path}/search` with `criteria` as the JSON body
    pub async fn search<B>(
        &self,
        ctx: &CancellationToken,
        criteria: &B,
        query: &Query,
    ) -> ClientResult<ApiResponse<R::Listing>>
    where
        B: Serialize + ?Sized,
    {
        let route = Route::new(format!("{}/search", R::PATH)).with_query(query.clone());
        self.post_route(ctx, &route, criteria).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_route_appends_id() {
        assert_eq!(nested_route("wallets", "AJbm").to_string(), "wallets/AJbm");
    }

    #[test]
    fn nested_route_escapes_id() {
        assert_eq!(nested_route("wallets", "a?b").to_string(), "wallets/a%3Fb");
        assert_eq!(
            nested_route("blocks", "../peers").to_string(),
            "blocks/..%2Fpeers"
        );
    }

    #[test]
    fn lookup_route_uses_query_key() {
        assert_eq!(
            lookup_route("blocks", "id", "42").to_string(),
            "blocks/get?id=42"
        );
    }
}
