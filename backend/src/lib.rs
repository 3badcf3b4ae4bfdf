mod adapter;
mod filter;
mod params;

pub use adapter::Adapter;
pub use filter::{Filter, FilterBlockOption, Topic};
pub use params::{InvalidParams, RpcParams};

use async_trait::async_trait;
use ethrpc_types::{
    rpc::{CallRequest, RpcBlock, RpcTransaction},
    Address, AtBlock, Bytes, Log, SyncStatus, TransactionReceipt, TransactionRequest, TxHash,
    H256, U256,
};
use serde::de::DeserializeOwned;
use std::fmt::Display;

/// Re-exports for downstream crates to not require any additional
/// dependencies to be explicitly added on the client side.
#[doc(hidden)]
pub mod ext {
    pub use async_trait::async_trait;
    pub use ethrpc_types as types;
    pub use serde;
    pub use serde_json;
}

/// Builds positional [`RpcParams`] from a list of serializable values.
///
/// ```
/// # use ethrpc_backend::rpc_params;
/// let params = rpc_params!["0x1", false].unwrap();
/// assert_eq!(params.to_string(), r#"["0x1",false]"#);
/// ```
#[macro_export]
macro_rules! rpc_params {
    () => {
        $crate::RpcParams::from_serializable(&[(); 0])
    };
    ($($param:expr),+ $(,)?) => {
        $crate::RpcParams::from_serializable(&($($param,)+))
    };
}

/// A client able to perform a single JSON-RPC method call.
#[async_trait]
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait JsonRpcClient: Send + Sync {
    type Error: Display + Send;

    /// Calls `method` with positional `params` and decodes the `result` member as `R`.
    async fn request<R>(&self, method: &str, params: RpcParams) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send;
}

/// Ethereum JSON-RPC methods.
#[async_trait]
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait EthereumRpc {
    type Error: Display;

    /// Returns the current client version.
    async fn client_version(&self) -> Result<String, Self::Error>;

    /// Returns the current network id.
    async fn net_version(&self) -> Result<String, Self::Error>;

    /// Returns `true` if client is actively listening for network connections.
    async fn net_listening(&self) -> Result<bool, Self::Error>;

    /// Returns number of peers currently connected to the client.
    async fn net_peer_count(&self) -> Result<u64, Self::Error>;

    /// Returns the current ethereum protocol version.
    async fn protocol_version(&self) -> Result<String, Self::Error>;

    /// Returns the sync progress, or [`SyncStatus::NotSyncing`].
    async fn syncing(&self) -> Result<SyncStatus, Self::Error>;

    /// Returns the client coinbase address.
    async fn coinbase(&self) -> Result<Address, Self::Error>;

    /// Returns `true` if client is actively mining new blocks.
    async fn mining(&self) -> Result<bool, Self::Error>;

    /// Returns the number of hashes per second that the node is mining with.
    async fn hashrate(&self) -> Result<U256, Self::Error>;

    /// Returns the current gas price in wei.
    async fn gas_price(&self) -> Result<U256, Self::Error>;

    /// Returns the currently configured chain ID, a value used in replay-protected
    /// transaction signing as introduced by EIP-155.
    async fn chain_id(&self) -> Result<u64, Self::Error>;

    /// Returns a list of addresses owned by client.
    async fn get_accounts(&self) -> Result<Vec<Address>, Self::Error>;

    /// Returns the number of most recent block.
    async fn block_number(&self) -> Result<u64, Self::Error>;

    /// Returns the balance of the account.
    async fn get_balance(&self, account: Address, at: AtBlock) -> Result<U256, Self::Error>;

    /// Returns the value from a storage position at a given address.
    async fn storage(
        &self,
        address: Address,
        index: U256,
        at: AtBlock,
    ) -> Result<H256, Self::Error>;

    /// Returns the number of transactions sent from an address.
    async fn get_transaction_count(
        &self,
        account: Address,
        at: AtBlock,
    ) -> Result<u64, Self::Error>;

    /// Returns the number of transactions in the block with the given hash, `None` if the block
    /// is unknown.
    async fn block_transaction_count_by_hash(
        &self,
        block_hash: H256,
    ) -> Result<Option<u64>, Self::Error>;

    /// Returns the number of transactions in the given block.
    async fn block_transaction_count_by_number(
        &self,
        at: AtBlock,
    ) -> Result<Option<u64>, Self::Error>;

    /// Returns the number of uncles in the block with the given hash.
    async fn uncle_count_by_block_hash(&self, block_hash: H256)
        -> Result<Option<u64>, Self::Error>;

    /// Returns the number of uncles in the given block.
    async fn uncle_count_by_block_number(&self, at: AtBlock) -> Result<Option<u64>, Self::Error>;

    /// Returns code at a given account
    async fn get_code(&self, address: Address, at: AtBlock) -> Result<Bytes, Self::Error>;

    /// Submits a pre-signed transaction for broadcast to the Ethereum network.
    async fn send_raw_transaction(&self, tx: Bytes) -> Result<TxHash, Self::Error>;

    /// Submits an unsigned transaction which will be signed by the node
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, Self::Error>;

    /// Executes a new message call immediately without creating a transaction on the blockchain.
    async fn call(&self, tx: &CallRequest, at: AtBlock) -> Result<Bytes, Self::Error>;

    /// Returns an estimate of how much gas is necessary to allow the transaction to complete.
    async fn estimate_gas(&self, tx: &CallRequest, at: AtBlock) -> Result<U256, Self::Error>;

    /// Returns information about a block, with transaction hashes only.
    async fn block(&self, at: AtBlock) -> Result<Option<RpcBlock<H256>>, Self::Error>;

    /// Returns information about a block, with full transaction objects.
    async fn block_full(
        &self,
        at: AtBlock,
    ) -> Result<Option<RpcBlock<RpcTransaction>>, Self::Error>;

    /// Returns the information about a transaction requested by transaction hash.
    async fn transaction_by_hash(&self, tx: TxHash)
        -> Result<Option<RpcTransaction>, Self::Error>;

    /// Returns information about a transaction by block and transaction index position.
    async fn transaction_by_block_and_index(
        &self,
        at: AtBlock,
        index: u64,
    ) -> Result<Option<RpcTransaction>, Self::Error>;

    /// Returns the receipt of a transaction by transaction hash.
    async fn transaction_receipt(
        &self,
        tx: TxHash,
    ) -> Result<Option<TransactionReceipt>, Self::Error>;

    /// Returns information about an uncle of a block by index position.
    async fn uncle_by_block_and_index(
        &self,
        at: AtBlock,
        index: u64,
    ) -> Result<Option<RpcBlock<H256>>, Self::Error>;

    /// Returns an array of all logs matching a given filter object.
    async fn get_logs(&self, filter: &Filter) -> Result<Vec<Log>, Self::Error>;
}
