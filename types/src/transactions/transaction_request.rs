use super::{typed_transaction::TypedTransaction, GasPrice};
use crate::{bytes::Bytes, codec::encode_u64, Address, U256};
use serde::ser::SerializeStruct;

/// Transaction the node signs with one of its own accounts, the `eth_sendTransaction` payload.
///
/// Fields left as `None` are filled in by the node.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct TransactionRequest {
    /// Account the node signs with
    pub from: Address,
    /// Recipient address (None for contract creation)
    pub to: Option<Address>,
    pub gas_limit: Option<u64>,
    pub gas_price: Option<GasPrice>,
    pub value: Option<U256>,
    pub data: Option<Bytes>,
    pub nonce: Option<u64>,
}

impl TransactionRequest {
    #[must_use]
    pub fn new(from: Address) -> Self {
        Self { from, ..Self::default() }
    }

    #[must_use]
    pub const fn to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }

    #[must_use]
    pub const fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    #[must_use]
    pub const fn gas_price(mut self, gas_price: GasPrice) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    #[must_use]
    pub const fn value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn data<T: Into<Bytes>>(mut self, data: T) -> Self {
        self.data = Some(data.into());
        self
    }

    #[must_use]
    pub const fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Builds a request that sends `tx` from `from`, keeping every field the payload defines.
    #[must_use]
    pub fn from_typed(from: Address, tx: &TypedTransaction) -> Self {
        Self {
            from,
            to: tx.to(),
            gas_limit: Some(tx.gas_limit()),
            gas_price: Some(tx.gas_price()),
            value: Some(tx.value()),
            data: Some(tx.data().clone()),
            nonce: Some(tx.nonce()),
        }
    }
}

impl serde::Serialize for TransactionRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = serializer.serialize_struct("TransactionRequest", 8)?;
        s.serialize_field("from", &self.from)?;
        if let Some(to) = self.to {
            s.serialize_field("to", &to)?;
        }
        if let Some(gas_limit) = self.gas_limit {
            s.serialize_field("gas", &encode_u64(gas_limit))?;
        }
        match self.gas_price {
            Some(GasPrice::Legacy(gas_price)) => s.serialize_field("gasPrice", &gas_price)?,
            Some(GasPrice::Eip1559 { max_priority_fee_per_gas, max_fee_per_gas }) => {
                s.serialize_field("maxFeePerGas", &max_fee_per_gas)?;
                s.serialize_field("maxPriorityFeePerGas", &max_priority_fee_per_gas)?;
            },
            None => {},
        }
        if let Some(value) = self.value {
            s.serialize_field("value", &value)?;
        }
        if let Some(ref data) = self.data {
            s.serialize_field("data", data)?;
        }
        if let Some(nonce) = self.nonce {
            s.serialize_field("nonce", &encode_u64(nonce))?;
        }
        s.end()
    }
}
