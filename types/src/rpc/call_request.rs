use crate::{
    bytes::Bytes,
    serde_utils::{deserialize_null_default, uint_to_hex},
    transactions::{
        access_list::AccessList, eip1559::Eip1559Transaction, eip2930::Eip2930Transaction,
        legacy::LegacyTransaction, typed_transaction::TypedTransaction,
    },
    Address, U256,
};

/// Call request for `eth_call` and `eth_estimateGas`.
#[derive(Clone, Default, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// Sender address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,

    /// Recipient address (None for contract creation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,

    /// Supplied gas (None for sensible default)
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "gas", with = "uint_to_hex")]
    pub gas_limit: Option<u64>,

    /// Gas price (None for sensible default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,

    /// Transferred value (None for no transfer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,

    /// The data of the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,

    /// The nonce of the transaction. If set to `None`, no checks are performed.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub nonce: Option<u64>,

    /// The chain ID of the transaction. If set to `None`, no checks are performed.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub chain_id: Option<u64>,

    /// The priority fee per gas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,

    /// A list of addresses and storage keys that the transaction plans to access.
    #[serde(
        default,
        skip_serializing_if = "AccessList::is_empty",
        deserialize_with = "deserialize_null_default"
    )]
    pub access_list: AccessList,

    /// The max fee per gas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,

    /// EIP-2718 type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub transaction_type: Option<u64>,
}

impl CallRequest {
    /// Read-only call of `data` against the contract at `to`.
    #[must_use]
    pub fn new<T: Into<Bytes>>(to: Address, data: T) -> Self {
        Self { to: Some(to), data: Some(data.into()), ..Self::default() }
    }

    #[must_use]
    pub const fn sender(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }
}

impl From<LegacyTransaction> for CallRequest {
    fn from(tx: LegacyTransaction) -> Self {
        Self {
            from: None,
            to: tx.to,
            gas_limit: Some(tx.gas_limit),
            gas_price: Some(tx.gas_price),
            value: Some(tx.value),
            data: Some(tx.data),
            nonce: Some(tx.nonce),
            chain_id: tx.chain_id,
            max_priority_fee_per_gas: None,
            access_list: AccessList::default(),
            max_fee_per_gas: None,
            transaction_type: Some(0x00),
        }
    }
}

impl From<Eip2930Transaction> for CallRequest {
    fn from(tx: Eip2930Transaction) -> Self {
        Self {
            from: None,
            to: tx.to,
            gas_limit: Some(tx.gas_limit),
            gas_price: Some(tx.gas_price),
            value: Some(tx.value),
            data: Some(tx.data),
            nonce: Some(tx.nonce),
            chain_id: Some(tx.chain_id),
            max_priority_fee_per_gas: None,
            access_list: tx.access_list,
            max_fee_per_gas: None,
            transaction_type: Some(0x01),
        }
    }
}

impl From<Eip1559Transaction> for CallRequest {
    fn from(tx: Eip1559Transaction) -> Self {
        Self {
            from: None,
            to: tx.to,
            gas_limit: Some(tx.gas_limit),
            gas_price: None,
            max_priority_fee_per_gas: Some(tx.max_priority_fee_per_gas),
            max_fee_per_gas: Some(tx.max_fee_per_gas),
            value: Some(tx.value),
            data: Some(tx.data),
            nonce: Some(tx.nonce),
            chain_id: Some(tx.chain_id),
            access_list: tx.access_list,
            transaction_type: Some(0x02),
        }
    }
}

impl From<TypedTransaction> for CallRequest {
    fn from(tx: TypedTransaction) -> Self {
        match tx {
            TypedTransaction::Legacy(tx) => tx.into(),
            TypedTransaction::Eip2930(tx) => tx.into(),
            TypedTransaction::Eip1559(tx) => tx.into(),
        }
    }
}
