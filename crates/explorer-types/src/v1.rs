// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response shapes of the explorer's first API revision
//!
//! v1 responses are flat objects carrying a `success` flag. Failed calls set it to
//! `false` and explain why in `error`. Collections and single items are keyed by
//! the resource name (`blocks`/`block`, `delegates`/`delegate`, ...), which
//! [`Listing`] and [`Single`] accept under any of those names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A collection response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    /// Whether the call succeeded
    #[serde(default)]
    pub success: bool,
    /// Returned items
    #[serde(
        default = "Vec::new",
        rename = "items",
        alias = "accounts",
        alias = "blocks",
        alias = "delegates",
        alias = "peers",
        alias = "transactions"
    )]
    pub items: Vec<T>,
    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Listing<T> {
    /// Returns the items, or the server's error message when the call failed
    pub fn into_result(self) -> Result<Vec<T>, String> {
        if self.success {
            Ok(self.items)
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "request was not successful".to_string()))
        }
    }
}

/// A single-item response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Single<T> {
    /// Whether the call succeeded
    #[serde(default)]
    pub success: bool,
    /// Returned item, absent when the call failed
    #[serde(
        default = "Option::default",
        rename = "item",
        alias = "account",
        alias = "block",
        alias = "delegate",
        alias = "peer",
        alias = "transaction"
    )]
    pub item: Option<T>,
    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Single<T> {
    /// Returns the item, or the server's error message when the call failed
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.item) {
            (true, Some(item)) => Ok(item),
            (_, _) => Err(self
                .error
                .unwrap_or_else(|| "item missing from response".to_string())),
        }
    }
}

/// An account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
    /// Account address
    pub address: String,
    /// Balance including pending transactions, in arktoshi
    pub unconfirmed_balance: String,
    /// Confirmed balance, in arktoshi
    pub balance: String,
    /// Public key, absent until the account has sent a transaction
    pub public_key: Option<String>,
    /// Whether a second signature is pending registration
    pub unconfirmed_signature: u8,
    /// Whether a second signature is registered
    pub second_signature: u8,
    /// Second-signature public key
    pub second_public_key: Option<String>,
    /// Multisignature group members
    pub multisignatures: Vec<Value>,
    /// Pending multisignature group members
    #[serde(rename = "u_multisignatures")]
    pub unconfirmed_multisignatures: Vec<Value>,
}

/// Balance of an account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountBalance {
    /// Whether the call succeeded
    pub success: bool,
    /// Confirmed balance
    pub balance: String,
    /// Balance including pending transactions
    pub unconfirmed_balance: String,
    /// Failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Public key of an account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountPublicKey {
    /// Whether the call succeeded
    pub success: bool,
    /// Public key
    pub public_key: Option<String>,
    /// Failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A forged block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Block {
    /// Block identifier
    pub id: String,
    /// Block format version
    pub version: u32,
    /// Seconds since the network epoch
    pub timestamp: u64,
    /// Chain height
    pub height: u64,
    /// Identifier of the parent block
    pub previous_block: Option<String>,
    /// Number of transactions
    pub number_of_transactions: u64,
    /// Sum of transferred amounts
    pub total_amount: u64,
    /// Sum of fees
    pub total_fee: u64,
    /// Block reward
    pub reward: u64,
    /// Payload length in bytes
    pub payload_length: u64,
    /// Payload hash
    pub payload_hash: String,
    /// Public key of the forging delegate
    pub generator_public_key: String,
    /// Address of the forging delegate
    pub generator_id: String,
    /// Block signature
    pub block_signature: String,
    /// Number of blocks on top of this one
    pub confirmations: u64,
    /// Reward plus fees
    pub total_forged: String,
}

/// Current chain height
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockHeight {
    /// Whether the call succeeded
    pub success: bool,
    /// Chain height
    pub height: u64,
    /// Identifier of the last block
    pub id: Option<String>,
}

/// A network fee
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fee {
    /// Whether the call succeeded
    pub success: bool,
    /// Fee in arktoshi
    pub fee: u64,
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
    pub vote: String,
    /// Blocks forged
    #[serde(rename = "producedblocks")]
    pub produced_blocks: u64,
    /// Slots missed
    #[serde(rename = "missedblocks")]
    pub missed_blocks: u64,
    /// Current rank
    pub rate: u32,
    /// Percentage of supply voting for the delegate
    pub approval: f64,
    /// Percentage of slots forged
    pub productivity: f64,
}

/// Number of registered delegates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegateCount {
    /// Whether the call succeeded
    pub success: bool,
    /// Number of delegates
    pub count: u64,
}

/// Totals forged by a delegate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgedTotals {
    /// Whether the call succeeded
    pub success: bool,
    /// Collected fees
    pub fees: String,
    /// Collected rewards
    pub rewards: String,
    /// Fees plus rewards
    pub forged: String,
}

/// A network peer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    /// Peer address
    pub ip: String,
    /// Peer P2P port
    pub port: u16,
    /// Node software version
    pub version: String,
    /// Operating system
    pub os: Option<String>,
    /// Reported chain height
    pub height: Option<u64>,
    /// Peer state as seen by the queried node
    pub status: String,
    /// Round-trip latency in milliseconds
    pub delay: Option<u64>,
}

/// Node software version of the queried peer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerVersion {
    /// Whether the call succeeded
    pub success: bool,
    /// Version string
    pub version: String,
    /// Build identifier
    pub build: String,
}

/// A transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction identifier
    pub id: String,
    /// Containing block
    #[serde(rename = "blockid")]
    pub block_id: Option<String>,
    /// Height of the containing block
    pub height: Option<u64>,
    /// Transaction type code
    #[serde(rename = "type")]
    pub kind: u8,
    /// Seconds since the network epoch
    pub timestamp: u64,
    /// Transferred amount
    pub amount: u64,
    /// Paid fee
    pub fee: u64,
    /// Sender address
    pub sender_id: String,
    /// Recipient address
    pub recipient_id: Option<String>,
    /// Sender public key
    pub sender_public_key: String,
    /// Sender signature
    pub signature: String,
    /// Free-form memo
    pub vendor_field: Option<String>,
    /// Number of blocks on top of the containing block
    pub confirmations: u64,
    /// Type-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Value>,
}

/// Blockchain loading state of the queried node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderStatus {
    /// Whether the call succeeded
    pub success: bool,
    /// Whether the blockchain finished loading
    pub loaded: bool,
    /// Current height
    pub now: u64,
    /// Blocks left to load
    pub blocks_count: i64,
}

/// Synchronisation state of the queried node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncStatus {
    /// Whether the call succeeded
    pub success: bool,
    /// Whether the node is syncing
    pub syncing: bool,
    /// Blocks left to download
    pub blocks: i64,
    /// Current height
    pub height: u64,
    /// Identifier of the last block
    pub id: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn listing_accepts_resource_keys() {
        let delegates: Listing<Delegate> = serde_json::from_value(json!({
            "success": true,
            "delegates": [{
                "username": "arkpool",
                "address": "AKATy581uaJ2Sc9Dc4tcs3rH8TFbtShpoL",
                "publicKey": "03f1d...",
                "vote": "158123456789",
                "producedblocks": 51000,
                "missedblocks": 12,
                "rate": 3,
                "approval": 1.25,
                "productivity": 99.98
            }]
        }))
        .unwrap();

        let delegates = delegates.into_result().unwrap();
        assert_eq!(delegates.len(), 1);
        assert_eq!(delegates[0].produced_blocks, 51_000);
        assert_eq!(delegates[0].rate, 3);

        let peers: Listing<Peer> = serde_json::from_value(json!({
            "success": true,
            "peers": [{"ip": "5.39.9.240", "port": 4001, "version": "1.1.1", "status": "OK"}]
        }))
        .unwrap();
        assert_eq!(peers.items[0].port, 4001);
    }

    #[test]
    fn failed_listing_reports_error() {
        let listing: Listing<Block> = serde_json::from_value(json!({
            "success": false,
            "error": "Invalid limit"
        }))
        .unwrap();

        assert!(listing.items.is_empty());
        assert_eq!(listing.into_result().unwrap_err(), "Invalid limit");
    }

    #[test]
    fn single_accepts_resource_keys() {
        let block: Single<Block> = serde_json::from_value(json!({
            "success": true,
            "block": {
                "id": "13114381566690093367",
                "height": 1,
                "numberOfTransactions": 153,
                "generatorPublicKey": "03d3fdad..."
            }
        }))
        .unwrap();

        let block = block.into_result().unwrap();
        assert_eq!(block.id, "13114381566690093367");
        assert_eq!(block.number_of_transactions, 153);

        let missing: Single<Transaction> = serde_json::from_value(json!({
            "success": false,
            "error": "Transaction not found"
        }))
        .unwrap();
        assert_eq!(missing.into_result().unwrap_err(), "Transaction not found");
    }

    #[test]
    fn account_multisignature_fields() {
        let account: Single<Account> = serde_json::from_value(json!({
            "success": true,
            "account": {
                "address": "AUexKjGtgsSpVzPLs6jNMM6vJ6znEVTQWK",
                "balance": "1000",
                "unconfirmedBalance": "900",
                "multisignatures": [],
                "u_multisignatures": ["+02abc"]
            }
        }))
        .unwrap();

        let account = account.item.unwrap();
        assert_eq!(account.unconfirmed_balance, "900");
        assert_eq!(account.unconfirmed_multisignatures.len(), 1);
    }

    #[test]
    fn transaction_lowercase_block_id() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": "f1",
            "blockid": "42",
            "type": 0,
            "senderId": "AJ...",
            "recipientId": "AK..."
        }))
        .unwrap();

        assert_eq!(tx.block_id.as_deref(), Some("42"));
        assert_eq!(tx.recipient_id.as_deref(), Some("AK..."));
    }
}
