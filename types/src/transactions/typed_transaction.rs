use super::{
    access_list::AccessList, eip1559::Eip1559Transaction, eip2930::Eip2930Transaction,
    legacy::LegacyTransaction, GasPrice,
};
use crate::{bytes::Bytes, Address, U256};

/// Unsigned transaction of any supported EIP-2718 type.
#[derive(Clone, PartialEq, Eq, Debug, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum TypedTransaction {
    #[serde(rename = "0x0")]
    Legacy(LegacyTransaction),
    #[serde(rename = "0x1")]
    Eip2930(Eip2930Transaction),
    #[serde(rename = "0x2")]
    Eip1559(Eip1559Transaction),
}

impl TypedTransaction {
    /// EIP-2718 transaction type.
    #[must_use]
    pub const fn transaction_type(&self) -> u64 {
        match self {
            Self::Legacy(_) => 0x00,
            Self::Eip2930(_) => 0x01,
            Self::Eip1559(_) => 0x02,
        }
    }

    #[must_use]
    pub const fn chain_id(&self) -> Option<u64> {
        match self {
            Self::Legacy(tx) => tx.chain_id,
            Self::Eip2930(tx) => Some(tx.chain_id),
            Self::Eip1559(tx) => Some(tx.chain_id),
        }
    }

    #[must_use]
    pub const fn nonce(&self) -> u64 {
        match self {
            Self::Legacy(tx) => tx.nonce,
            Self::Eip2930(tx) => tx.nonce,
            Self::Eip1559(tx) => tx.nonce,
        }
    }

    #[must_use]
    pub const fn gas_limit(&self) -> u64 {
        match self {
            Self::Legacy(tx) => tx.gas_limit,
            Self::Eip2930(tx) => tx.gas_limit,
            Self::Eip1559(tx) => tx.gas_limit,
        }
    }

    #[must_use]
    pub const fn gas_price(&self) -> GasPrice {
        match self {
            Self::Legacy(tx) => GasPrice::Legacy(tx.gas_price),
            Self::Eip2930(tx) => GasPrice::Legacy(tx.gas_price),
            Self::Eip1559(tx) => GasPrice::Eip1559 {
                max_priority_fee_per_gas: tx.max_priority_fee_per_gas,
                max_fee_per_gas: tx.max_fee_per_gas,
            },
        }
    }

    #[must_use]
    pub const fn to(&self) -> Option<Address> {
        match self {
            Self::Legacy(tx) => tx.to,
            Self::Eip2930(tx) => tx.to,
            Self::Eip1559(tx) => tx.to,
        }
    }

    #[must_use]
    pub const fn value(&self) -> U256 {
        match self {
            Self::Legacy(tx) => tx.value,
            Self::Eip2930(tx) => tx.value,
            Self::Eip1559(tx) => tx.value,
        }
    }

    #[must_use]
    pub const fn data(&self) -> &Bytes {
        match self {
            Self::Legacy(tx) => &tx.data,
            Self::Eip2930(tx) => &tx.data,
            Self::Eip1559(tx) => &tx.data,
        }
    }

    #[must_use]
    pub const fn access_list(&self) -> Option<&AccessList> {
        match self {
            Self::Legacy(_) => None,
            Self::Eip2930(tx) => Some(&tx.access_list),
            Self::Eip1559(tx) => Some(&tx.access_list),
        }
    }
}

impl From<LegacyTransaction> for TypedTransaction {
    fn from(tx: LegacyTransaction) -> Self {
        Self::Legacy(tx)
    }
}

impl From<Eip2930Transaction> for TypedTransaction {
    fn from(tx: Eip2930Transaction) -> Self {
        Self::Eip2930(tx)
    }
}

impl From<Eip1559Transaction> for TypedTransaction {
    fn from(tx: Eip1559Transaction) -> Self {
        Self::Eip1559(tx)
    }
}
