use super::access_list::AccessList;
use crate::{bytes::Bytes, serde_utils::uint_to_hex, Address, U256};

/// Transaction with an optional access list, introduced by [EIP-2930].
///
/// [EIP-2930]: https://eips.ethereum.org/EIPS/eip-2930
#[derive(Clone, Default, PartialEq, Eq, Debug, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip2930Transaction {
    #[serde(with = "uint_to_hex")]
    pub chain_id: u64,

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

    #[serde(default, skip_serializing_if = "AccessList::is_empty")]
    pub access_list: AccessList,
}
