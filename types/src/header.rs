use crate::{
    bytes::Bytes,
    serde_utils::{deserialize_null_default, uint_to_hex},
    Address, H256, U256,
};
use ethbloom::Bloom;
use hex_literal::hex;

/// Keccak-256 of the RLP encoding of an empty list, the ommers hash of a block without uncles.
pub const EMPTY_OMMER_ROOT_HASH: H256 =
    H256(hex!("1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347"));

/// Root hash of an empty trie.
pub const EMPTY_ROOT_HASH: H256 =
    H256(hex!("56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421"));

/// Execution block header as returned inside `eth_getBlockBy*` results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub parent_hash: H256,
    #[serde(rename = "sha3Uncles")]
    pub ommers_hash: H256,
    /// `null` for pending blocks.
    #[serde(rename = "miner", alias = "beneficiary", default, deserialize_with = "deserialize_null_default")]
    pub beneficiary: Address,
    pub state_root: H256,
    pub transactions_root: H256,
    pub receipts_root: H256,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub logs_bloom: Bloom,
    #[serde(default)]
    pub difficulty: U256,
    #[serde(with = "uint_to_hex")]
    pub number: u64,
    #[serde(with = "uint_to_hex")]
    pub gas_limit: u64,
    #[serde(with = "uint_to_hex")]
    pub gas_used: u64,
    #[serde(with = "uint_to_hex")]
    pub timestamp: u64,
    #[serde(default)]
    pub extra_data: Bytes,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub mix_hash: H256,
    /// 8 byte proof-of-work nonce, zero after the merge and for pending blocks.
    #[serde(default, with = "nonce_to_hex")]
    pub nonce: u64,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub base_fee_per_gas: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawals_root: Option<H256>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub blob_gas_used: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub excess_blob_gas: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_beacon_block_root: Option<H256>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            parent_hash: H256::zero(),
            ommers_hash: EMPTY_OMMER_ROOT_HASH,
            beneficiary: Address::zero(),
            state_root: EMPTY_ROOT_HASH,
            transactions_root: EMPTY_ROOT_HASH,
            receipts_root: EMPTY_ROOT_HASH,
            logs_bloom: Bloom::zero(),
            difficulty: U256::zero(),
            number: 0,
            gas_limit: 0,
            gas_used: 0,
            timestamp: 0,
            extra_data: Bytes::default(),
            mix_hash: H256::zero(),
            nonce: 0,
            base_fee_per_gas: None,
            withdrawals_root: None,
            blob_gas_used: None,
            excess_blob_gas: None,
            parent_beacon_block_root: None,
        }
    }
}

/// The header nonce travels as fixed width data (`0x0000000000000000`) rather than a quantity.
mod nonce_to_hex {
    use crate::serde_utils::uint_to_hex;
    use serde::{Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&const_hex::encode_prefixed(value.to_be_bytes()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nonce: Option<u64> = uint_to_hex::deserialize(deserializer)?;
        Ok(nonce.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_london_header() {
        let json = json!({
            "parentHash": "0x1e77d8f1267348b516ebc4f4da1e2aa59f85f0cbd853949500ffac8bfc38ba14",
            "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
            "miner": "0x2a65aca4d5fc5b5c859090a6c34d164135398226",
            "stateRoot": "0x0b5e4386680f43c224c5c037efc0b645c8e1c3f6b30da0eec07272b4e6f8cd89",
            "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "difficulty": "0x0",
            "number": "0xf4240",
            "gasLimit": "0x1c9c380",
            "gasUsed": "0x0",
            "timestamp": "0x6500b6e7",
            "extraData": "0x",
            "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "nonce": "0x0000000000000042",
            "baseFeePerGas": "0x7",
        });
        let header: Header = serde_json::from_value(json).unwrap();
        assert_eq!(header.number, 1_000_000);
        assert_eq!(header.gas_limit, 30_000_000);
        assert_eq!(header.nonce, 0x42);
        assert_eq!(header.base_fee_per_gas, Some(7));
        assert_eq!(header.ommers_hash, EMPTY_OMMER_ROOT_HASH);
        assert_eq!(header.transactions_root, EMPTY_ROOT_HASH);
        assert_eq!(
            header.beneficiary,
            Address::from(hex!("2a65aca4d5fc5b5c859090a6c34d164135398226"))
        );
        assert_eq!(header.withdrawals_root, None);

        let encoded = serde_json::to_value(&header).unwrap();
        assert_eq!(encoded["nonce"], json!("0x0000000000000042"));
        assert_eq!(encoded["number"], json!("0xf4240"));
        assert!(encoded.get("withdrawalsRoot").is_none());
    }

    #[test]
    fn pending_header_has_null_fields() {
        let mut json = serde_json::to_value(Header::default()).unwrap();
        json["miner"] = serde_json::Value::Null;
        json["nonce"] = serde_json::Value::Null;
        json["mixHash"] = serde_json::Value::Null;
        let header: Header = serde_json::from_value(json).unwrap();
        assert_eq!(header, Header::default());
    }
}
