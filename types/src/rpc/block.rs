use crate::{
    bytes::Bytes,
    header::Header,
    serde_utils::{deserialize_null_default, uint_to_hex},
    H256, U256,
};

/// The block type returned from RPC calls.
///
/// This is generic over a `TX` type which will be either the hash or the full transaction,
/// i.e. `RpcBlock<TxHash>` or `RpcBlock<RpcTransaction>`.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlock<TX, OMMERS = H256> {
    /// Hash of the block, `None` for pending blocks
    #[serde(default)]
    pub hash: Option<H256>,

    /// Block header.
    #[serde(flatten)]
    pub header: Header,

    /// Total difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_difficulty: Option<U256>,

    /// Seal fields
    #[serde(
        default,
        rename = "sealFields",
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub seal_fields: Vec<Bytes>,

    /// Transactions
    #[serde(
        default = "Vec::new",
        bound(serialize = "TX: serde::Serialize", deserialize = "TX: serde::de::DeserializeOwned")
    )]
    pub transactions: Vec<TX>,

    /// Uncles' hashes
    #[serde(
        default = "Vec::new",
        bound(
            serialize = "OMMERS: serde::Serialize",
            deserialize = "OMMERS: serde::de::DeserializeOwned"
        )
    )]
    pub uncles: Vec<OMMERS>,

    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub size: Option<u64>,
}
