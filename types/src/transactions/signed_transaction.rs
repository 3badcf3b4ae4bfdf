use super::{signature::Signature, typed_transaction::TypedTransaction};
use crate::TxHash;

/// A transaction payload together with its signature and hash, as included in a block.
#[derive(Clone, PartialEq, Eq, Debug, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction<T = TypedTransaction> {
    #[serde(rename = "hash")]
    pub tx_hash: TxHash,
    #[serde(bound = "T: serde::Serialize + serde::de::DeserializeOwned", flatten)]
    pub payload: T,
    #[serde(flatten)]
    pub signature: Signature,
}

impl<T> SignedTransaction<T> {
    pub const fn new(tx_hash: TxHash, payload: T, signature: Signature) -> Self {
        Self { tx_hash, payload, signature }
    }

    pub const fn payload(&self) -> &T {
        &self.payload
    }
}
