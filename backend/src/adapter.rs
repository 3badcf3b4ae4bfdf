use crate::{rpc_params, EthereumRpc, Filter, InvalidParams, JsonRpcClient, RpcParams};
use async_trait::async_trait;
use ethrpc_types::{
    codec::{decode_quantity, decode_u64, encode_quantity, encode_u64},
    rpc::{CallRequest, RpcBlock, RpcTransaction},
    Address, AtBlock, BlockIdentifier, Bytes, DecodeError, Log, SyncStatus, TransactionReceipt,
    TransactionRequest, TxHash, H256, U256,
};
use std::ops::{Deref, DerefMut};

/// Adapter for [`JsonRpcClient`] to [`EthereumRpc`].
#[repr(transparent)]
pub struct Adapter<T: JsonRpcClient>(pub T);

impl<T> Adapter<T>
where
    T: JsonRpcClient,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Adapter<T>
where
    T: JsonRpcClient,
{
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> AsRef<T> for Adapter<T>
where
    T: JsonRpcClient,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> AsMut<T> for Adapter<T>
where
    T: JsonRpcClient,
{
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Deref for Adapter<T>
where
    T: JsonRpcClient,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Adapter<T>
where
    T: JsonRpcClient,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Clone for Adapter<T>
where
    T: JsonRpcClient + Clone,
{
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> std::fmt::Debug for Adapter<T>
where
    T: JsonRpcClient + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Adapter").field(&self.0).finish()
    }
}

impl<T> Adapter<T>
where
    T: JsonRpcClient,
    T::Error: From<DecodeError> + From<InvalidParams>,
{
    /// Calls a method whose result is a 256-bit quantity.
    async fn quantity(&self, method: &str, params: RpcParams) -> Result<U256, T::Error> {
        let value = <T as JsonRpcClient>::request::<String>(&self.0, method, params).await?;
        Ok(decode_quantity(&value)?)
    }

    /// Calls a method whose result is a 64-bit quantity.
    async fn u64_quantity(&self, method: &str, params: RpcParams) -> Result<u64, T::Error> {
        let value = <T as JsonRpcClient>::request::<String>(&self.0, method, params).await?;
        Ok(decode_u64(&value)?)
    }

    /// Calls a method whose result is a 64-bit quantity or `null`.
    async fn optional_count(
        &self,
        method: &str,
        params: RpcParams,
    ) -> Result<Option<u64>, T::Error> {
        let value =
            <T as JsonRpcClient>::request::<Option<String>>(&self.0, method, params).await?;
        match value {
            Some(value) => Ok(Some(decode_u64(&value)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<T> EthereumRpc for Adapter<T>
where
    T: JsonRpcClient,
    T::Error: From<DecodeError> + From<InvalidParams>,
{
    type Error = T::Error;

    async fn client_version(&self) -> Result<String, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "web3_clientVersion", rpc_params![]?).await
    }

    async fn net_version(&self) -> Result<String, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "net_version", rpc_params![]?).await
    }

    async fn net_listening(&self) -> Result<bool, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "net_listening", rpc_params![]?).await
    }

    async fn net_peer_count(&self) -> Result<u64, Self::Error> {
        self.u64_quantity("net_peerCount", rpc_params![]?).await
    }

    async fn protocol_version(&self) -> Result<String, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_protocolVersion", rpc_params![]?).await
    }

    async fn syncing(&self) -> Result<SyncStatus, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_syncing", rpc_params![]?).await
    }

    async fn coinbase(&self) -> Result<Address, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_coinbase", rpc_params![]?).await
    }

    async fn mining(&self) -> Result<bool, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_mining", rpc_params![]?).await
    }

    async fn hashrate(&self) -> Result<U256, Self::Error> {
        self.quantity("eth_hashrate", rpc_params![]?).await
    }

    async fn gas_price(&self) -> Result<U256, Self::Error> {
        self.quantity("eth_gasPrice", rpc_params![]?).await
    }

    async fn chain_id(&self) -> Result<u64, Self::Error> {
        self.u64_quantity("eth_chainId", rpc_params![]?).await
    }

    async fn get_accounts(&self) -> Result<Vec<Address>, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_accounts", rpc_params![]?).await
    }

    async fn block_number(&self) -> Result<u64, Self::Error> {
        self.u64_quantity("eth_blockNumber", rpc_params![]?).await
    }

    async fn get_balance(&self, account: Address, at: AtBlock) -> Result<U256, Self::Error> {
        self.quantity("eth_getBalance", rpc_params![account, at]?).await
    }

    async fn storage(
        &self,
        address: Address,
        index: U256,
        at: AtBlock,
    ) -> Result<H256, Self::Error> {
        let params = rpc_params![address, encode_quantity(index), at]?;
        <T as JsonRpcClient>::request(&self.0, "eth_getStorageAt", params).await
    }

    async fn get_transaction_count(
        &self,
        account: Address,
        at: AtBlock,
    ) -> Result<u64, Self::Error> {
        self.u64_quantity("eth_getTransactionCount", rpc_params![account, at]?).await
    }

    async fn block_transaction_count_by_hash(
        &self,
        block_hash: H256,
    ) -> Result<Option<u64>, Self::Error> {
        self.optional_count("eth_getBlockTransactionCountByHash", rpc_params![block_hash]?).await
    }

    async fn block_transaction_count_by_number(
        &self,
        at: AtBlock,
    ) -> Result<Option<u64>, Self::Error> {
        self.optional_count("eth_getBlockTransactionCountByNumber", rpc_params![at]?).await
    }

    async fn uncle_count_by_block_hash(
        &self,
        block_hash: H256,
    ) -> Result<Option<u64>, Self::Error> {
        self.optional_count("eth_getUncleCountByBlockHash", rpc_params![block_hash]?).await
    }

    async fn uncle_count_by_block_number(&self, at: AtBlock) -> Result<Option<u64>, Self::Error> {
        self.optional_count("eth_getUncleCountByBlockNumber", rpc_params![at]?).await
    }

    async fn get_code(&self, address: Address, at: AtBlock) -> Result<Bytes, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_getCode", rpc_params![address, at]?).await
    }

    async fn send_raw_transaction(&self, tx: Bytes) -> Result<TxHash, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_sendRawTransaction", rpc_params![tx]?).await
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_sendTransaction", rpc_params![tx]?).await
    }

    async fn call(&self, tx: &CallRequest, at: AtBlock) -> Result<Bytes, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_call", rpc_params![tx, at]?).await
    }

    async fn estimate_gas(&self, tx: &CallRequest, at: AtBlock) -> Result<U256, Self::Error> {
        self.quantity("eth_estimateGas", rpc_params![tx, at]?).await
    }

    async fn block(&self, at: AtBlock) -> Result<Option<RpcBlock<H256>>, Self::Error> {
        let method = match at {
            AtBlock::At(BlockIdentifier::Hash(_)) => "eth_getBlockByHash",
            _ => "eth_getBlockByNumber",
        };
        <T as JsonRpcClient>::request(&self.0, method, rpc_params![at, false]?).await
    }

    async fn block_full(
        &self,
        at: AtBlock,
    ) -> Result<Option<RpcBlock<RpcTransaction>>, Self::Error> {
        let method = match at {
            AtBlock::At(BlockIdentifier::Hash(_)) => "eth_getBlockByHash",
            _ => "eth_getBlockByNumber",
        };
        <T as JsonRpcClient>::request(&self.0, method, rpc_params![at, true]?).await
    }

    async fn transaction_by_hash(
        &self,
        tx: TxHash,
    ) -> Result<Option<RpcTransaction>, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_getTransactionByHash", rpc_params![tx]?).await
    }

    async fn transaction_by_block_and_index(
        &self,
        at: AtBlock,
        index: u64,
    ) -> Result<Option<RpcTransaction>, Self::Error> {
        let method = match at {
            AtBlock::At(BlockIdentifier::Hash(_)) => {
                "eth_getTransactionByBlockHashAndIndex"
            },
            _ => "eth_getTransactionByBlockNumberAndIndex",
        };
        <T as JsonRpcClient>::request(&self.0, method, rpc_params![at, encode_u64(index)]?).await
    }

    async fn transaction_receipt(
        &self,
        tx: TxHash,
    ) -> Result<Option<TransactionReceipt>, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_getTransactionReceipt", rpc_params![tx]?)
            .await
    }

    async fn uncle_by_block_and_index(
        &self,
        at: AtBlock,
        index: u64,
    ) -> Result<Option<RpcBlock<H256>>, Self::Error> {
        let method = match at {
            AtBlock::At(BlockIdentifier::Hash(_)) => {
                "eth_getUncleByBlockHashAndIndex"
            },
            _ => "eth_getUncleByBlockNumberAndIndex",
        };
        <T as JsonRpcClient>::request(&self.0, method, rpc_params![at, encode_u64(index)]?).await
    }

    async fn get_logs(&self, filter: &Filter) -> Result<Vec<Log>, Self::Error> {
        <T as JsonRpcClient>::request(&self.0, "eth_getLogs", rpc_params![filter]?).await
    }
}
