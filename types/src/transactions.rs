pub mod access_list;
pub mod eip1559;
pub mod eip2930;
pub mod legacy;
pub mod signature;
pub mod signed_transaction;
pub mod transaction_request;
pub mod typed_transaction;

use crate::U256;

/// Fee fields of a transaction, either a single legacy gas price or the EIP-1559 pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum GasPrice {
    Legacy(U256),
    Eip1559 { max_priority_fee_per_gas: U256, max_fee_per_gas: U256 },
}

impl Default for GasPrice {
    fn default() -> Self {
        Self::Legacy(U256::zero())
    }
}
