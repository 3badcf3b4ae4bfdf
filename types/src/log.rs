use crate::{bytes::Bytes, serde_utils::uint_to_hex, Address, H256};

/// A log produced by a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// H160. the contract that emitted the log
    pub address: Address,

    /// topics: Array of 0 to 4 32 Bytes of indexed log arguments.
    /// (In solidity: The first topic is the hash of the signature of the event
    /// (e.g. `Deposit(address,bytes32,uint256)`), except you declared the event
    /// with the anonymous specifier.)
    pub topics: Vec<H256>,

    /// Data
    pub data: Bytes,

    /// Block Hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<H256>,

    /// Block Number
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub block_number: Option<u64>,

    /// Transaction Hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<H256>,

    /// Transaction Index
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub transaction_index: Option<u64>,

    /// Integer of the log index position in the block. None if it's a pending log.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub log_index: Option<u64>,

    /// True when the log was removed, due to a chain reorganization.
    /// false if it's a valid log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
}
