use super::access_list::AccessList;
use crate::{bytes::Bytes, serde_utils::uint_to_hex, Address, U256};

/// Transactions with type 0x2 are transactions introduced in EIP-1559, included in Ethereum's
/// London fork. EIP-1559 addresses the network congestion and overpricing of transaction fees
/// caused by the historical fee market, in which users send transactions specifying a gas price
/// bid using the gasPrice parameter, and miners choose transactions with the highest bids.
#[derive(Clone, Default, PartialEq, Eq, Debug, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip1559Transaction {
    /// The chain ID of the transaction. It is mandatory for EIP-1559 transactions.
    #[serde(with = "uint_to_hex")]
    pub chain_id: u64,

    /// The nonce of the transaction.
    #[serde(with = "uint_to_hex")]
    pub nonce: u64,

    /// Represents the maximum tx fee that will go to the miner as part of the user's
    /// fee payment.
    pub max_priority_fee_per_gas: U256,

    /// Represents the maximum amount that a user is willing to pay for their tx (inclusive of
    /// baseFeePerGas and maxPriorityFeePerGas). The difference between maxFeePerGas and
    /// baseFeePerGas + maxPriorityFeePerGas is “refunded” to the user.
    pub max_fee_per_gas: U256,

    /// Supplied gas
    #[serde(rename = "gas", with = "uint_to_hex")]
    pub gas_limit: u64,

    /// Recipient address (None for contract creation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,

    /// Transferred value
    pub value: U256,

    /// The data of the transaction.
    #[serde(default, skip_serializing_if = "Bytes::is_empty")]
    pub data: Bytes,

    /// Optional access list introduced in EIP-2930.
    #[serde(default, skip_serializing_if = "AccessList::is_empty")]
    pub access_list: AccessList,
}
