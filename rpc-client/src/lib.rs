mod client;
mod config;
pub mod envelope;
mod error;
#[cfg(feature = "http")]
mod http;
pub mod pending;
mod transport;

pub use client::RpcClient;
pub use config::{ClientConfig, ConfigError, DEFAULT_TIMEOUT, DEFAULT_URL, TEN_MB_SIZE_BYTES};
pub use error::{Error, RpcError, TransportError};
pub use ethrpc_backend::{Adapter, EthereumRpc, Filter, JsonRpcClient, RpcParams, Topic};
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use transport::Transport;

// Re-exports
pub mod exports {
    pub use ethrpc_backend as backend;
    pub use ethrpc_types as types;
    #[cfg(feature = "http")]
    pub use hyper;
    pub use serde;
    pub use serde_json;
}

/// Easy imports of frequently used traits.
pub mod prelude {
    pub use ethrpc_backend::{EthereumRpc, JsonRpcClient};
    pub use ethrpc_types::{Address, AtBlock, Bytes, H256, U256};
    pub use serde::{de::DeserializeOwned, Deserialize, Serialize};
}

/// Typed Ethereum client over HTTP(S).
///
/// # Errors
/// Returns [`TransportError::InvalidRequest`] if `config` can't be turned into an http client.
#[cfg(feature = "http")]
pub fn http(config: &ClientConfig) -> Result<Adapter<RpcClient<HttpTransport>>, TransportError> {
    let transport = HttpTransport::new(config)?;
    Ok(Adapter(RpcClient::new(transport)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ethrpc_types::{Address, AtBlock, U256};
    use hex_literal::hex;
    use serde_json::{json, Value};

    /// In-process node answering a fixed set of methods.
    struct MockNode;

    #[async_trait]
    impl Transport for MockNode {
        async fn send(&self, request: String) -> Result<String, TransportError> {
            let request = serde_json::from_str::<Value>(&request).map_err(TransportError::Encode)?;
            let id = request["id"].clone();
            let response = match request["method"].as_str() {
                Some("eth_gasPrice") => json!({ "jsonrpc": "2.0", "id": id, "result": "0x3039" }),
                Some("eth_getBalance") => {
                    json!({ "jsonrpc": "2.0", "id": id, "result": "0xde0b6b3a7640000" })
                },
                Some("eth_blockNumber") => {
                    // cut off mid-body
                    return Ok(format!(r#"{{"jsonrpc":"2.0","id":{id},"result":"#));
                },
                Some("eth_getTransactionReceipt") => {
                    json!({ "jsonrpc": "2.0", "id": id, "result": null })
                },
                _ => json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "error": { "code": -32601, "message": "method not found" },
                }),
            };
            Ok(response.to_string())
        }
    }

    #[tokio::test]
    async fn typed_calls_over_mock_node() {
        let client = Adapter(RpcClient::new(MockNode));
        assert_eq!(client.gas_price().await.unwrap(), U256::from(12345));

        let account = Address::from(hex!("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        let balance = client.get_balance(account, AtBlock::Latest).await.unwrap();
        assert_eq!(balance, U256::exp10(18));

        let receipt = client.transaction_receipt(ethrpc_types::H256::zero()).await.unwrap();
        assert!(receipt.is_none());
    }

    #[tokio::test]
    async fn method_not_found_is_an_rpc_error() {
        let client = Adapter(RpcClient::new(MockNode));
        let error = client.net_peer_count().await.unwrap_err();
        let rpc_error = error.as_rpc_error().unwrap();
        assert_eq!(rpc_error.code, RpcError::METHOD_NOT_FOUND);
        assert_eq!(rpc_error.message, "method not found");
    }

    #[tokio::test]
    async fn truncated_body_is_a_transport_error() {
        let client = Adapter(RpcClient::new(MockNode));
        let error = client.block_number().await.unwrap_err();
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(client.pending_calls(), 0);
    }

    #[cfg(feature = "http")]
    #[test]
    fn http_constructor() {
        let config = ClientConfig::localhost().unwrap();
        let client = http(&config).unwrap();
        assert_eq!(client.transport().uri().to_string(), "http://127.0.0.1:8545/");
    }
}
