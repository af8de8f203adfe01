// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response shapes of the explorer's second API revision
//!
//! Every v2 response wraps its payload in a `data` member. Collections add a
//! `meta` member describing pagination. Field names are camelCase on the wire.
//! Structs default missing members so that partial payloads still decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination details attached to every v2 collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    /// Items on this page
    pub count: u64,
    /// Total number of pages
    pub page_count: u64,
    /// Total number of items across all pages
    pub total_count: u64,
    /// Relative link to the next page
    pub next: Option<String>,
    /// Relative link to the previous page
    pub previous: Option<String>,
    /// Relative link to this page
    #[serde(rename = "self")]
    pub current: Option<String>,
    /// Relative link to the first page
    pub first: Option<String>,
    /// Relative link to the last page
    pub last: Option<String>,
}

/// A page of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Pagination details, absent on unpaginated collections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Items on this page
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page has no items
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the server advertised a following page
    pub fn has_next_page(&self) -> bool {
        self.meta.as_ref().is_some_and(|meta| meta.next.is_some())
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            meta: None,
            data: Vec::new(),
        }
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// A single item wrapped in `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped item
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwraps the item
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Point in time as reported by Ark nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timestamp {
    /// Seconds since the network epoch
    pub epoch: u64,
    /// Seconds since the Unix epoch
    pub unix: u64,
    /// ISO 8601 rendering
    pub human: String,
}

/// Amounts collected by the forger of a block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockForged {
    /// Block reward
    pub reward: u64,
    /// Sum of transaction fees
    pub fee: u64,
    /// Reward plus fees
    pub total: u64,
    /// Sum of transferred amounts
    pub amount: u64,
}

/// Payload digest of a block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockPayload {
    /// Payload hash
    pub hash: String,
    /// Payload length in bytes
    pub length: u64,
}

/// Delegate that forged a block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockGenerator {
    /// Delegate username
    pub username: Option<String>,
    /// Delegate address
    pub address: String,
    /// Delegate public key
    pub public_key: String,
}

/// A forged block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Block {
    /// Block identifier
    pub id: String,
    /// Block format version
    pub version: u32,
    /// Chain height
    pub height: u64,
    /// Identifier of the parent block
    pub previous: Option<String>,
    /// Forged amounts
    pub forged: BlockForged,
    /// Payload digest
    pub payload: BlockPayload,
    /// Forging delegate
    pub generator: BlockGenerator,
    /// Block signature
    pub signature: String,
    /// Number of blocks on top of this one
    pub confirmations: u64,
    /// Number of transactions
    pub transactions: u64,
    /// Forging time
    pub timestamp: Timestamp,
}

/// A transaction, confirmed or pending
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction identifier
    pub id: String,
    /// Containing block, absent while unconfirmed
    pub block_id: Option<String>,
    /// Transaction type code
    #[serde(rename = "type")]
    pub kind: u8,
    /// Transferred amount
    pub amount: u64,
    /// Paid fee
    pub fee: u64,
    /// Sender address
    pub sender: String,
    /// Recipient address
    pub recipient: Option<String>,
    /// Sender signature
    pub signature: String,
    /// Second signature
    pub sign_signature: Option<String>,
    /// Free-form memo
    pub vendor_field: Option<String>,
    /// Number of blocks on top of the containing block
    pub confirmations: u64,
    /// Creation time
    pub timestamp: Timestamp,
    /// Type-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Value>,
}

/// An account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Wallet {
    /// Wallet address
    pub address: String,
    /// Public key, absent until the wallet has sent a transaction
    pub public_key: Option<String>,
    /// Delegate username
    pub username: Option<String>,
    /// Second-signature public key
    pub second_public_key: Option<String>,
    /// Balance in arktoshi
    pub balance: u64,
    /// Whether the wallet registered as a delegate
    pub is_delegate: bool,
    /// Public key of the delegate this wallet votes for
    pub vote: Option<String>,
}

/// Last block forged by a delegate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastBlock {
    /// Block identifier
    pub id: String,
    /// Chain height
    pub height: u64,
    /// Forging time
    pub timestamp: Timestamp,
}

/// Forging record of a delegate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegateBlocks {
    /// Blocks forged
    pub produced: u64,
    /// Slots missed
    pub missed: u64,
    /// Most recent forged block
    pub last: Option<LastBlock>,
}

/// Vote share and reliability of a delegate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegateProduction {
    /// Percentage of supply voting for the delegate
    pub approval: f64,
    /// Percentage of slots forged
    pub productivity: f64,
}

/// Totals forged by a delegate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegateForged {
    /// Collected fees
    pub fees: u64,
    /// Collected rewards
    pub rewards: u64,
    /// Fees plus rewards
    pub total: u64,
}

/// A registered delegate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Delegate {
    /// Delegate username
    pub username: String,
    /// Delegate address
    pub address: String,
    /// Delegate public key
    pub public_key: String,
    /// Vote weight in arktoshi
    pub votes: u64,
    /// Current rank
    pub rank: u32,
    /// Forging record
    pub blocks: DelegateBlocks,
    /// Vote share and reliability
    pub production: DelegateProduction,
    /// Forged totals
    pub forged: DelegateForged,
}

/// A network peer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    /// Peer address
    pub ip: String,
    /// Peer P2P port
    pub port: u16,
    /// Node software version
    pub version: String,
    /// Reported chain height
    pub height: Option<u64>,
    /// Status reported by the peer, numeric or textual depending on node version
    pub status: Option<Value>,
    /// Operating system
    pub os: Option<String>,
    /// Round-trip latency in milliseconds
    pub latency: Option<u64>,
}

/// Synchronisation state of the queried node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeStatus {
    /// Whether the node caught up with the network
    pub synced: bool,
    /// Current height of the node
    pub now: u64,
    /// Blocks the node is behind (negative when ahead)
    pub blocks_count: i64,
}

/// Progress of an ongoing node synchronisation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSyncing {
    /// Whether the node is syncing
    pub syncing: bool,
    /// Blocks left to download
    pub blocks: i64,
    /// Current height
    pub height: u64,
    /// Identifier of the last block
    pub id: String,
}

/// Network parameters published by the queried node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeConfiguration {
    /// Network hash
    pub nethash: String,
    /// Token name
    pub token: String,
    /// Token symbol
    pub symbol: String,
    /// Explorer URL
    pub explorer: String,
    /// Address version byte
    pub version: u8,
    /// Ports exposed by node plugins, keyed by plugin name
    pub ports: BTreeMap<String, u16>,
    /// Recent fee statistics per transaction type
    pub fee_statistics: Vec<Value>,
    /// Active network constants
    pub constants: Value,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn partial_block_decodes() {
        let block: Block = serde_json::from_value(json!({"id": "123"})).unwrap();
        assert_eq!(block.id, "123");
        assert_eq!(block.height, 0);
        assert!(block.previous.is_none());
    }

    #[test]
    fn paginated_blocks_decode() {
        let page: Paginated<Block> = serde_json::from_value(json!({
            "meta": {
                "count": 1,
                "pageCount": 10,
                "totalCount": 10,
                "next": "/api/blocks?page=2",
                "previous": null,
                "self": "/api/blocks?page=1",
                "first": "/api/blocks?page=1",
                "last": "/api/blocks?page=10"
            },
            "data": [{
                "id": "7176646138626297930",
                "version": 0,
                "height": 2243161,
                "previous": "3112633353705641986",
                "forged": {"reward": 200000000, "fee": 0, "total": 200000000, "amount": 0},
                "payload": {"hash": "e3b0c442", "length": 0},
                "generator": {
                    "username": "biz_classic",
                    "address": "AKdr5d9AMEnsKYxpDcoHdyyjSCKVx3r9Nj",
                    "publicKey": "020431436cf94f3c6a6ba566fe9e42678db8486590c732ca6c3803a10a86f50b92"
                },
                "signature": "304402",
                "transactions": 0,
                "timestamp": {"epoch": 32816600, "unix": 1522917800, "human": "2018-04-05T08:43:20Z"}
            }]
        }))
        .unwrap();

        assert_eq!(page.len(), 1);
        assert!(page.has_next_page());
        let meta = page.meta.clone().unwrap();
        assert_eq!(meta.current.as_deref(), Some("/api/blocks?page=1"));
        assert_eq!(meta.page_count, 10);

        let block = page.into_iter().next().unwrap();
        assert_eq!(block.height, 2_243_161);
        assert_eq!(block.forged.reward, 200_000_000);
        assert_eq!(block.generator.username.as_deref(), Some("biz_classic"));
        assert_eq!(block.timestamp.unix, 1_522_917_800);
    }

    #[test]
    fn transaction_type_field_is_renamed() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": "abc",
            "blockId": "42",
            "type": 3,
            "amount": 0,
            "fee": 100000000,
            "sender": "AJbmGnDAbYsXWsHnNRiNQuApyWcqrAmDqz",
            "vendorField": "hello",
            "asset": {"votes": ["+0257b7724e97d14ae..."]}
        }))
        .unwrap();

        assert_eq!(tx.kind, 3);
        assert_eq!(tx.block_id.as_deref(), Some("42"));
        assert_eq!(tx.vendor_field.as_deref(), Some("hello"));
        assert!(tx.asset.is_some());

        let encoded = serde_json::to_value(&tx).unwrap();
        assert_eq!(encoded["type"], 3);
        assert_eq!(encoded["blockId"], "42");
    }

    #[test]
    fn envelope_unwraps() {
        let status: Envelope<NodeStatus> = serde_json::from_value(json!({
            "data": {"synced": true, "now": 4_000_000, "blocksCount": -1}
        }))
        .unwrap();

        let status = status.into_inner();
        assert!(status.synced);
        assert_eq!(status.blocks_count, -1);
    }

    #[test]
    fn unpaginated_collection_has_no_next_page() {
        let page: Paginated<Peer> = serde_json::from_value(json!({
            "data": [{"ip": "10.0.0.1", "port": 4001, "version": "2.0.0", "status": "OK"}]
        }))
        .unwrap();

        assert!(page.meta.is_none());
        assert!(!page.has_next_page());
        assert_eq!(page.data[0].status, Some(json!("OK")));
    }
}
