// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(missing_docs, dead_code)]

//! Test fixtures for the explorer client
//!
//! Provides a scripted in-memory transport and canned explorer payloads.

use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use explorer_client::{
    CancellationToken, ExplorerClient, Transport, TransportConfig, TransportError,
    TransportRequest, TransportResponse,
};
use reqwest::StatusCode;
use serde_json::{Value, json};
use wiremock::MockServer;

/// What a [`RecordingTransport`] does when invoked
#[derive(Debug, Clone)]
pub enum Script {
    /// Answer with the given status and body
    Respond(StatusCode, String),
    /// Fail with a transport error
    Fail(String),
    /// Cancel the token, then fail with a transport error
    CancelThenFail(CancellationToken),
}

/// Transport that records every request and answers from a script
#[derive(Debug)]
pub struct RecordingTransport {
    script: Script,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            delay: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer 200 with `body`
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(Script::Respond(StatusCode::OK, body.into()))
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of times `execute` was entered
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.script {
            Script::Respond(status, body) => Ok(TransportResponse::new(*status, body.clone())),
            Script::Fail(message) => Err(TransportError::custom(anyhow::anyhow!(message.clone()))),
            Script::CancelThenFail(token) => {
                token.cancel();
                Err(TransportError::custom(anyhow::anyhow!("connection reset")))
            }
        }
    }
}

/// Explorer API root served by `mock_server`
pub fn api_root(mock_server: &MockServer) -> String {
    format!("{}/api/", mock_server.uri())
}

/// Client with the default transport pointed at `mock_server`
pub fn mock_client(mock_server: &MockServer) -> ExplorerClient {
    ExplorerClient::new()
        .unwrap()
        .with_base_url(&api_root(mock_server))
        .unwrap()
}

/// Client with a scripted transport and a valid base URL
pub fn scripted_client(transport: RecordingTransport) -> ExplorerClient<RecordingTransport> {
    ExplorerClient::with_transport(transport)
        .with_base_url("https://explorer.test/api/")
        .unwrap()
}

/// `User-Agent` sent by the default transport
pub fn default_user_agent() -> String {
    TransportConfig::default().user_agent
}

/// A v2 block as served by `blocks/{id}`
pub fn v2_block(id: &str, height: u64) -> Value {
    json!({
        "id": id,
        "version": 0,
        "height": height,
        "previous": "1209874651239847",
        "forged": {"reward": 200_000_000u64, "fee": 0, "total": 200_000_000u64},
        "payload": {"hash": "e3b0c442", "length": 0},
        "generator": {
            "username": "arkpool",
            "address": "AJbmGnDAvyjBsAm9YjrTGqEsxqPtCJUfCT",
            "publicKey": "02e6e0f2"
        },
        "signature": "3045",
        "confirmations": 12,
        "transactions": 0,
        "timestamp": {"epoch": 51_966_104, "unix": 1_542_067_304, "human": "2018-11-13T00:01:44.000Z"}
    })
}

/// A v2 page with pagination details
pub fn v2_page(items: Vec<Value>, next: Option<&str>) -> Value {
    json!({
        "meta": {
            "count": items.len(),
            "pageCount": 3,
            "totalCount": 7,
            "next": next,
            "previous": null,
            "self": "/api/blocks?page=1&limit=3",
            "first": "/api/blocks?page=1&limit=3",
            "last": "/api/blocks?page=3&limit=3"
        },
        "data": items
    })
}

/// A v2 wallet
pub fn v2_wallet(address: &str, balance: u64) -> Value {
    json!({
        "address": address,
        "publicKey": "03ab",
        "username": null,
        "balance": balance,
        "isDelegate": false,
        "vote": null
    })
}

/// A v2 transaction
pub fn v2_transaction(id: &str) -> Value {
    json!({
        "id": id,
        "blockId": "8902",
        "type": 0,
        "amount": 100_000_000u64,
        "fee": 10_000_000u64,
        "sender": "AJbmGnDAvyjBsAm9YjrTGqEsxqPtCJUfCT",
        "recipient": "AUexKjGtgsSpVzPLs6jNMM6vJ6znEVTQWK",
        "signature": "3044",
        "vendorField": "hello",
        "confirmations": 3,
        "timestamp": {"epoch": 51_966_104, "unix": 1_542_067_304, "human": "2018-11-13T00:01:44.000Z"}
    })
}

/// Body of `node/status`
pub fn node_status(synced: bool, now: u64, blocks_count: i64) -> Value {
    json!({"data": {"synced": synced, "now": now, "blocksCount": blocks_count}})
}
