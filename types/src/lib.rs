mod bytes;
pub mod checksum;
pub mod codec;
pub mod header;
mod log;
pub mod rpc;
pub mod serde_utils;
mod sync_status;
pub mod transactions;
mod tx_receipt;

use std::{
    cmp::{Ordering, PartialOrd},
    fmt::{Display, Formatter, Result as FmtResult},
};

pub use bytes::Bytes;
pub use checksum::{parse_address, to_checksum, Checksum};
pub use codec::DecodeError;
pub use ethbloom::{Bloom, BloomRef, Input as BloomInput};
pub use header::Header;
pub use log::Log;
pub use primitive_types::{H128, H160, H256, H512, U128, U256, U512};
pub use rpc::{CallRequest, RpcBlock, RpcTransaction};
pub use sync_status::{SyncProgress, SyncStatus};
pub use transactions::{
    access_list::{AccessList, AccessListItem},
    eip1559::Eip1559Transaction,
    eip2930::Eip2930Transaction,
    legacy::LegacyTransaction,
    signature::{RecoveryId, Signature},
    signed_transaction::SignedTransaction,
    transaction_request::TransactionRequest,
    typed_transaction::TypedTransaction,
    GasPrice,
};
pub use tx_receipt::TransactionReceipt;

/// 20-byte account address.
pub type Address = H160;

/// Keccak hash of a signed transaction.
pub type TxHash = H256;

/// Re-exports so downstream crates don't need to depend on the primitive crates directly.
pub mod ext {
    pub use bytes;
    pub use const_hex;
    pub use ethbloom;
    pub use primitive_types;
    pub use serde;
    pub use sha3;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BlockIdentifier {
    Hash(H256),
    Number(u64),
}

impl From<u64> for BlockIdentifier {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<H256> for BlockIdentifier {
    fn from(hash: H256) -> Self {
        Self::Hash(hash)
    }
}

impl serde::Serialize for BlockIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use crate::serde_utils::uint_to_hex;
        match self {
            Self::Hash(hash) => <H256 as serde::Serialize>::serialize(hash, serializer),
            Self::Number(number) => uint_to_hex::serialize(number, serializer),
        }
    }
}

/// Block selector accepted by every state-reading method.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum AtBlock {
    /// Latest block
    #[default]
    Latest,
    /// Finalized block accepted as canonical
    Finalized,
    /// Safe head block
    Safe,
    /// Earliest block (genesis)
    Earliest,
    /// Pending block (not yet part of the blockchain)
    Pending,
    /// Specific Block
    At(BlockIdentifier),
}

impl AtBlock {
    /// Returns the block number if this selects a block by number.
    #[must_use]
    pub const fn as_number(&self) -> Option<u64> {
        match self {
            Self::At(BlockIdentifier::Number(number)) => Some(*number),
            _ => None,
        }
    }

    /// Returns the block hash if this selects a block by hash.
    #[must_use]
    pub const fn as_hash(&self) -> Option<H256> {
        match self {
            Self::At(BlockIdentifier::Hash(hash)) => Some(*hash),
            _ => None,
        }
    }
}

impl From<H256> for AtBlock {
    fn from(hash: H256) -> Self {
        Self::At(BlockIdentifier::Hash(hash))
    }
}

impl From<[u8; 32]> for AtBlock {
    fn from(hash: [u8; 32]) -> Self {
        Self::At(BlockIdentifier::Hash(H256(hash)))
    }
}

impl From<u64> for AtBlock {
    fn from(block_number: u64) -> Self {
        Self::At(BlockIdentifier::Number(block_number))
    }
}

impl From<u32> for AtBlock {
    fn from(block_number: u32) -> Self {
        Self::At(BlockIdentifier::Number(u64::from(block_number)))
    }
}

impl From<BlockIdentifier> for AtBlock {
    fn from(block: BlockIdentifier) -> Self {
        Self::At(block)
    }
}

impl PartialOrd for AtBlock {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Tags are ordered by how far they sit from genesis, explicit blocks are not comparable
        const fn as_rank(at: &AtBlock) -> Option<u8> {
            let n = match at {
                AtBlock::Pending => 50,
                AtBlock::Latest => 40,
                AtBlock::Safe => 30,
                AtBlock::Finalized => 20,
                AtBlock::Earliest => 10,
                AtBlock::At(_) => return None,
            };
            Some(n)
        }
        let this = as_rank(self)?;
        let other = as_rank(other)?;
        Some(this.cmp(&other))
    }
}

impl Display for AtBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Finalized => f.write_str("finalized"),
            Self::Safe => f.write_str("safe"),
            Self::Earliest => f.write_str("earliest"),
            Self::Pending => f.write_str("pending"),
            Self::At(BlockIdentifier::Hash(hash)) => write!(f, "{hash:?}"),
            Self::At(BlockIdentifier::Number(number)) => Display::fmt(&number, f),
        }
    }
}

impl serde::Serialize for AtBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            Self::Latest => <str as serde::Serialize>::serialize("latest", serializer),
            Self::Finalized => <str as serde::Serialize>::serialize("finalized", serializer),
            Self::Safe => <str as serde::Serialize>::serialize("safe", serializer),
            Self::Earliest => <str as serde::Serialize>::serialize("earliest", serializer),
            Self::Pending => <str as serde::Serialize>::serialize("pending", serializer),
            Self::At(at) => <BlockIdentifier as serde::Serialize>::serialize(at, serializer),
        }
    }
}

impl<'de> serde::Deserialize<'de> for AtBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::str::FromStr;
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        match s.as_str() {
            "latest" => return Ok(Self::Latest),
            "finalized" => return Ok(Self::Finalized),
            "safe" => return Ok(Self::Safe),
            "earliest" => return Ok(Self::Earliest),
            "pending" => return Ok(Self::Pending),
            _ => {},
        }

        if let Some(hexdecimal) = s.strip_prefix("0x") {
            if s.len() == 66 {
                let hash = H256::from_str(hexdecimal).map_err(serde::de::Error::custom)?;
                Ok(Self::At(BlockIdentifier::Hash(hash)))
            } else {
                let number = codec::decode_u64(&s).map_err(serde::de::Error::custom)?;
                Ok(Self::At(BlockIdentifier::Number(number)))
            }
        } else {
            let number = s.parse::<u64>().map_err(serde::de::Error::custom)?;
            Ok(Self::At(BlockIdentifier::Number(number)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use serde_json::json;

    #[test]
    fn at_block_serializes_tags_and_numbers() {
        let hash = H256(hex!("8ea7da5fa8e6f8f4a8f3b2c3f0a1e8f3e4f1f0c9a2e6b5c8d7e0f1a2b3c4d5e6"));
        let cases = [
            (AtBlock::Latest, json!("latest")),
            (AtBlock::Earliest, json!("earliest")),
            (AtBlock::Pending, json!("pending")),
            (AtBlock::Safe, json!("safe")),
            (AtBlock::Finalized, json!("finalized")),
            (AtBlock::from(0u64), json!("0x0")),
            (AtBlock::from(1_234_567u64), json!("0x12d687")),
            (
                AtBlock::from(hash),
                json!("0x8ea7da5fa8e6f8f4a8f3b2c3f0a1e8f3e4f1f0c9a2e6b5c8d7e0f1a2b3c4d5e6"),
            ),
        ];
        for (at, expected) in cases {
            let actual = serde_json::to_value(at).unwrap();
            assert_eq!(actual, expected);
            let decoded = serde_json::from_value::<AtBlock>(expected).unwrap();
            assert_eq!(decoded, at);
        }
    }

    #[test]
    fn at_block_display() {
        assert_eq!(AtBlock::Pending.to_string(), "pending");
        assert_eq!(AtBlock::Latest.to_string(), "latest");
        assert_eq!(AtBlock::from(42u64).to_string(), "42");
    }

    #[test]
    fn at_block_tags_are_ordered() {
        assert!(AtBlock::Earliest < AtBlock::Finalized);
        assert!(AtBlock::Safe < AtBlock::Latest);
        assert!(AtBlock::Latest < AtBlock::Pending);
        assert_eq!(AtBlock::from(1u64).partial_cmp(&AtBlock::Latest), None);
    }
}
