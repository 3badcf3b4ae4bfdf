use crate::{
    bytes::Bytes,
    serde_utils::{deserialize_null_default, uint_to_hex},
    transactions::{
        access_list::AccessList, eip1559::Eip1559Transaction, eip2930::Eip2930Transaction,
        legacy::LegacyTransaction, signature::Signature, signed_transaction::SignedTransaction,
        typed_transaction::TypedTransaction,
    },
    Address, TxHash, H256, U256,
};

/// Transaction object returned by `eth_getTransactionBy*` and inside full blocks.
#[derive(Clone, Default, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    /// Hash
    pub hash: TxHash,
    /// Nonce
    #[serde(with = "uint_to_hex")]
    pub nonce: u64,
    /// Block hash, `None` while pending
    #[serde(default)]
    pub block_hash: Option<H256>,
    /// Block number, `None` while pending
    #[serde(default, with = "uint_to_hex")]
    pub block_number: Option<u64>,
    /// Transaction Index
    #[serde(default, with = "uint_to_hex")]
    pub transaction_index: Option<u64>,
    /// Sender
    pub from: Address,
    /// Recipient (None when contract creation)
    #[serde(default)]
    pub to: Option<Address>,
    /// Transferred value
    pub value: U256,
    /// Gas Price, for EIP-1559 transactions this is the effective gas price once included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// Max BaseFeePerGas the user is willing to pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    /// The miner's tip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
    /// Gas limit
    #[serde(default, rename = "gas")]
    pub gas_limit: U256,
    /// Data
    #[serde(default)]
    pub input: Bytes,
    /// The network id of the transaction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub chain_id: Option<u64>,
    /// The V, R and S field of the signature.
    #[serde(default, flatten)]
    pub signature: Signature,
    /// Pre-pay to warm storage access.
    #[serde(
        default,
        skip_serializing_if = "AccessList::is_empty",
        deserialize_with = "deserialize_null_default"
    )]
    pub access_list: AccessList,
    /// EIP-2718 type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none", with = "uint_to_hex")]
    pub transaction_type: Option<u64>,
}

impl TryFrom<RpcTransaction> for LegacyTransaction {
    type Error = &'static str;

    fn try_from(tx: RpcTransaction) -> Result<Self, Self::Error> {
        if matches!(tx.transaction_type, Some(transaction_type) if transaction_type != 0) {
            return Err("transaction type is not 0");
        }
        if !tx.access_list.is_empty() {
            return Err("legacy tx doesn't support access list");
        }
        if tx.max_fee_per_gas.is_some() || tx.max_priority_fee_per_gas.is_some() {
            return Err("legacy tx doesn't support EIP-1559 fees");
        }
        let Some(gas_price) = tx.gas_price else {
            return Err("legacy tx gas_price is mandatory");
        };

        // unsigned transactions carry the chain id in the `chainId` field only
        let chain_id = if tx.signature.r.is_zero() && tx.signature.s.is_zero() {
            tx.chain_id.or_else(|| tx.signature.v.chain_id())
        } else {
            tx.signature.v.chain_id()
        };

        Ok(Self {
            nonce: tx.nonce,
            gas_price,
            gas_limit: u64::try_from(tx.gas_limit).map_err(|_| "gas_limit overflows u64")?,
            to: tx.to,
            value: tx.value,
            data: tx.input,
            chain_id,
        })
    }
}

impl TryFrom<RpcTransaction> for Eip2930Transaction {
    type Error = &'static str;

    fn try_from(tx: RpcTransaction) -> Result<Self, Self::Error> {
        if matches!(tx.transaction_type, Some(transaction_type) if transaction_type != 1) {
            return Err("transaction type is not 1");
        }
        if tx.max_fee_per_gas.is_some() || tx.max_priority_fee_per_gas.is_some() {
            return Err("EIP2930 tx doesn't support EIP-1559 fees");
        }
        let Some(chain_id) = tx.chain_id else {
            return Err("chain_id is mandatory for EIP2930 transactions");
        };
        let Some(gas_price) = tx.gas_price else {
            return Err("gas_price is mandatory for EIP2930 transactions");
        };

        Ok(Self {
            nonce: tx.nonce,
            gas_price,
            gas_limit: u64::try_from(tx.gas_limit).map_err(|_| "gas_limit overflows u64")?,
            to: tx.to,
            value: tx.value,
            data: tx.input,
            chain_id,
            access_list: tx.access_list,
        })
    }
}

impl TryFrom<RpcTransaction> for Eip1559Transaction {
    type Error = &'static str;

    fn try_from(tx: RpcTransaction) -> Result<Self, Self::Error> {
        if matches!(tx.transaction_type, Some(transaction_type) if transaction_type != 2) {
            return Err("transaction type is not 2");
        }
        let Some(chain_id) = tx.chain_id else {
            return Err("chain_id is mandatory for EIP1559 transactions");
        };
        let Some(max_fee_per_gas) = tx.max_fee_per_gas else {
            return Err("max_fee_per_gas is mandatory for EIP1559 transactions");
        };
        let Some(max_priority_fee_per_gas) = tx.max_priority_fee_per_gas else {
            return Err("max_priority_fee_per_gas is mandatory for EIP1559 transactions");
        };

        Ok(Self {
            nonce: tx.nonce,
            max_fee_per_gas,
            max_priority_fee_per_gas,
            gas_limit: u64::try_from(tx.gas_limit).map_err(|_| "gas_limit overflows u64")?,
            to: tx.to,
            value: tx.value,
            data: tx.input,
            chain_id,
            access_list: tx.access_list,
        })
    }
}

impl TryFrom<RpcTransaction> for TypedTransaction {
    type Error = &'static str;

    fn try_from(tx: RpcTransaction) -> Result<Self, Self::Error> {
        let typed_tx = match tx.transaction_type {
            Some(0) => Self::Legacy(tx.try_into()?),
            Some(1) => Self::Eip2930(tx.try_into()?),
            Some(2) => Self::Eip1559(tx.try_into()?),
            Some(_) => return Err("unknown transaction type"),
            None => {
                if tx.max_fee_per_gas.is_some() || tx.max_priority_fee_per_gas.is_some() {
                    Self::Eip1559(tx.try_into()?)
                } else if tx.access_list.is_empty() {
                    Self::Legacy(tx.try_into()?)
                } else {
                    Self::Eip2930(tx.try_into()?)
                }
            },
        };
        Ok(typed_tx)
    }
}

impl TryFrom<RpcTransaction> for SignedTransaction<TypedTransaction> {
    type Error = &'static str;

    fn try_from(tx: RpcTransaction) -> Result<Self, Self::Error> {
        let tx_hash = tx.hash;
        let signature = tx.signature;
        let payload = TypedTransaction::try_from(tx)?;
        Ok(Self { tx_hash, payload, signature })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transactions::signature::RecoveryId;
    use hex_literal::hex;

    const LEGACY_JSON: &str = r#"
    {
        "hash": "0x831a62a594cb62b250a606a63d3a762300815c8d3765c6192d46d6bca440faa6",
        "nonce": "0x32a",
        "blockHash": "0xdbdb6ab6ef116b498ceab7141a8ab1646960e2550bafbe3e8e22f1daffacc7cf",
        "blockNumber": "0x15780",
        "transactionIndex": "0x0",
        "from": "0x32be343b94f860124dc4fee278fdcbd38c102d88",
        "to": "0x78293691c74717191d1d417b531f398350d54e89",
        "value": "0x5fc1b97136320000",
        "gasPrice": "0xde197ae65",
        "gas": "0x5208",
        "input": "0x",
        "v": "0x1c",
        "r": "0xc8fc04e29b0859a7f265b67af7d4c5c6bc9e3d5a8de4950f89fa71a12a3cf8ae",
        "s": "0x7dd15a10f9f2c8d1519a6044d880d04756798fc23923ff94f4823df8dc5b987a",
        "type": "0x0"
    }"#;

    #[test]
    fn decode_legacy_json_works() {
        let expected = RpcTransaction {
            hash: hex!("831a62a594cb62b250a606a63d3a762300815c8d3765c6192d46d6bca440faa6").into(),
            nonce: 810,
            block_hash: Some(
                hex!("dbdb6ab6ef116b498ceab7141a8ab1646960e2550bafbe3e8e22f1daffacc7cf").into(),
            ),
            block_number: Some(87936),
            transaction_index: Some(0),
            gas_price: Some(59_619_389_029u64.into()),
            gas_limit: 21000.into(),
            from: Address::from(hex!("32be343b94f860124dc4fee278fdcbd38c102d88")),
            to: Some(Address::from(hex!("78293691c74717191d1d417b531f398350d54e89"))),
            value: 6_900_000_000_000_000_000u128.into(),
            input: Bytes::default(),
            chain_id: None,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
            signature: Signature {
                v: RecoveryId::new(0x1c),
                r: U256::from_big_endian(&hex!(
                    "c8fc04e29b0859a7f265b67af7d4c5c6bc9e3d5a8de4950f89fa71a12a3cf8ae"
                )),
                s: U256::from_big_endian(&hex!(
                    "7dd15a10f9f2c8d1519a6044d880d04756798fc23923ff94f4823df8dc5b987a"
                )),
            },
            access_list: AccessList::default(),
            transaction_type: Some(0),
        };
        let actual = serde_json::from_str::<RpcTransaction>(LEGACY_JSON).unwrap();
        assert_eq!(expected, actual);

        let signed = SignedTransaction::<TypedTransaction>::try_from(actual).unwrap();
        assert_eq!(signed.tx_hash, expected.hash);
        let TypedTransaction::Legacy(tx) = signed.payload else {
            panic!("expected a legacy transaction");
        };
        assert_eq!(tx.nonce, 810);
        assert_eq!(tx.gas_limit, 21000);
        assert_eq!(tx.chain_id, None);
    }

    #[test]
    fn decode_eip1559_json_works() {
        let json = r#"
        {
            "blockHash": "0xfdee00b60ddb4fd465426871a247ca905ff2acd5425b2222ab495157038772f3",
            "blockNumber": "0x11abc28",
            "from": "0x1e8c05fa1e52adcb0b66808fa7b843d106f506d5",
            "gas": "0x2335e",
            "gasPrice": "0xb9c7097c0",
            "maxPriorityFeePerGas": "0x5f5e100",
            "maxFeePerGas": "0xbdee918d2",
            "hash": "0x24cce1f28e0462c26ece316d6ae808a972d41161a237f14d31ab22c11edfb122",
            "input": "0x161ac21f",
            "nonce": "0x1cca",
            "to": "0x00005ea00ac477b1030ce78506496e8c2de24bf5",
            "transactionIndex": "0x5f",
            "value": "0x38d7ea4c680000",
            "type": "0x2",
            "accessList": [],
            "chainId": "0x1",
            "v": "0x0",
            "r": "0x8623bae9c86fb05f96cebd0f07247afc363f0ed3e1cf381ef99277ebf2b6c84a",
            "s": "0x766ba586a5aac2769cf5ce9e3c6fccf01ad6c57eeefc3770e4a2f49516837ae2"
        }
        "#;
        let tx = serde_json::from_str::<RpcTransaction>(json).unwrap();
        assert_eq!(tx.nonce, 7370);
        assert_eq!(tx.block_number, Some(18_529_320));
        assert_eq!(tx.transaction_index, Some(95));
        assert_eq!(tx.chain_id, Some(1));
        assert_eq!(tx.max_priority_fee_per_gas, Some(U256::from(100_000_000)));
        assert_eq!(tx.input, hex!("161ac21f").to_vec());

        let TypedTransaction::Eip1559(payload) = TypedTransaction::try_from(tx).unwrap() else {
            panic!("expected an eip1559 transaction");
        };
        assert_eq!(payload.max_fee_per_gas, U256::from(50_984_458_450u64));
        assert_eq!(payload.gas_limit, 0x2335e);
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let mut tx = serde_json::from_str::<RpcTransaction>(LEGACY_JSON).unwrap();
        tx.transaction_type = Some(0x7e);
        assert_eq!(TypedTransaction::try_from(tx), Err("unknown transaction type"));
    }

    #[test]
    fn rejects_gas_limit_beyond_u64() {
        let mut tx = serde_json::from_str::<RpcTransaction>(LEGACY_JSON).unwrap();
        tx.gas_limit = U256::from(u64::MAX) + 1;
        assert_eq!(TypedTransaction::try_from(tx.clone()), Err("gas_limit overflows u64"));

        tx.gas_limit = U256::from(u64::MAX);
        let TypedTransaction::Legacy(payload) = TypedTransaction::try_from(tx).unwrap() else {
            panic!("expected a legacy transaction");
        };
        assert_eq!(payload.gas_limit, u64::MAX);
    }
}
