use crate::{bytes::Bytes, serde_utils::uint_to_hex, Address, U256};

/// Pre EIP-2718 transaction, optionally replay protected with [EIP-155].
///
/// [EIP-155]: https://eips.ethereum.org/EIPS/eip-155
#[derive(Clone, Default, PartialEq, Eq, Debug, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTransaction {
    #[serde(with = "uint_to_hex")]
    pub nonce: u64,

    pub gas_price: U256,

    #[serde(rename = "gas", with = "uint_to_hex")]
    pub gas_limit: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,

    pub value: U256,

    #[serde(default, skip_serializing_if = "Bytes::is_empty")]
    pub data: Bytes,

    /// `None` for transactions signed before EIP-155
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub chain_id: Option<u64>,
}
