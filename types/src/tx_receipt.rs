use crate::{log::Log, serde_utils::uint_to_hex, Address, H256, U256};
use ethbloom::Bloom;
use std::cmp::Ordering;

/// "Receipt" of an executed transaction: details of its execution.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Transaction hash.
    pub transaction_hash: H256,

    /// Index within the block.
    #[serde(with = "uint_to_hex")]
    pub transaction_index: u64,

    /// Hash of the block this transaction was included within.
    pub block_hash: Option<H256>,

    /// Number of the block this transaction was included within.
    #[serde(default, with = "uint_to_hex")]
    pub block_number: Option<u64>,

    /// address of the sender.
    pub from: Option<Address>,

    // address of the receiver. null when its a contract creation transaction.
    pub to: Option<Address>,

    /// Cumulative gas used within the block after this was executed.
    pub cumulative_gas_used: U256,

    /// Gas used by this transaction alone.
    ///
    /// Gas used is `None` if the the client is running in light client mode.
    pub gas_used: Option<U256>,

    /// Contract address created, or `None` if not a deployment.
    pub contract_address: Option<Address>,

    /// Logs generated within this transaction.
    pub logs: Vec<Log>,

    /// Status: either 1 (success) or 0 (failure). Only present after activation of [EIP-658](https://eips.ethereum.org/EIPS/eip-658)
    #[serde(rename = "status", default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub status_code: Option<u64>,

    /// State root. Only present before activation of [EIP-658](https://eips.ethereum.org/EIPS/eip-658)
    #[serde(rename = "root", default, skip_serializing_if = "Option::is_none")]
    pub state_root: Option<H256>,

    /// Logs bloom
    pub logs_bloom: Bloom,

    /// The price paid post-execution by the transaction (i.e. base fee + priority fee).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_gas_price: Option<U256>,

    /// EIP-2718 transaction type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub transaction_type: Option<u64>,
}

impl TransactionReceipt {
    /// `Some(true)` when the transaction succeeded, `None` for pre-byzantium receipts.
    #[must_use]
    pub const fn succeeded(&self) -> Option<bool> {
        match self.status_code {
            Some(status) => Some(status == 1),
            None => None,
        }
    }
}

// Compares the transaction receipt against another receipt by checking the blocks first and then
// the transaction index in the block
impl Ord for TransactionReceipt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.block_number, other.block_number) {
            (Some(number), Some(other_number)) => match number.cmp(&other_number) {
                Ordering::Equal => self.transaction_index.cmp(&other.transaction_index),
                ord => ord,
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.transaction_index.cmp(&other.transaction_index),
        }
    }
}

impl PartialOrd<Self> for TransactionReceipt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_receipt_works() {
        let json = json!({
            "transactionHash": "0x24cce1f28e0462c26ece316d6ae808a972d41161a237f14d31ab22c11edfb122",
            "transactionIndex": "0x5f",
            "blockHash": "0xfdee00b60ddb4fd465426871a247ca905ff2acd5425b2222ab495157038772f3",
            "blockNumber": "0x11abc28",
            "from": "0x1e8c05fa1e52adcb0b66808fa7b843d106f506d5",
            "to": "0x00005ea00ac477b1030ce78506496e8c2de24bf5",
            "cumulativeGasUsed": "0x8b1e7e",
            "gasUsed": "0x17bd5",
            "contractAddress": null,
            "logs": [],
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "status": "0x1",
            "effectiveGasPrice": "0xb9c7097c0",
            "type": "0x2"
        });
        let receipt: TransactionReceipt = serde_json::from_value(json).unwrap();
        assert_eq!(receipt.transaction_index, 95);
        assert_eq!(receipt.block_number, Some(18_529_320));
        assert_eq!(receipt.gas_used, Some(U256::from(0x17bd5)));
        assert_eq!(receipt.contract_address, None);
        assert_eq!(receipt.succeeded(), Some(true));
        assert_eq!(receipt.transaction_type, Some(2));
    }

    #[test]
    fn receipts_are_ordered_by_position() {
        let receipt = |block_number, transaction_index| TransactionReceipt {
            block_number,
            transaction_index,
            ..TransactionReceipt::default()
        };
        let mut receipts = vec![receipt(None, 0), receipt(Some(2), 1), receipt(Some(1), 3)];
        receipts.sort();
        assert_eq!(receipts, vec![receipt(Some(1), 3), receipt(Some(2), 1), receipt(None, 0)]);
    }
}
