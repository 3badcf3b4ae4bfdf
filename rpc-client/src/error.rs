use ethrpc_backend::InvalidParams;
use ethrpc_types::DecodeError;
use serde_json::Value;
use std::time::Duration;

/// A well formed JSON-RPC error object returned by the node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
#[error("(code: {code}, message: {message}, data: {data:?})")]
pub struct RpcError {
    /// The error code
    pub code: i64,
    /// The error message
    pub message: String,
    /// Additional data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    /// JSON-RPC 2.0 "method not found".
    pub const METHOD_NOT_FOUND: i64 = -32601;

    /// Returns the revert data attached to an `execution reverted` error, if any.
    #[must_use]
    pub fn revert_data(&self) -> Option<&str> {
        self.data.as_ref().and_then(Value::as_str).filter(|data| data.starts_with("0x"))
    }
}

/// Failures of the transport or of the JSON-RPC framing around a call.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("http error: {0}")]
    Http(#[from] hyper::Error),

    /// The request couldn't be built, usually a bad header or url.
    #[error("invalid http request: {0}")]
    InvalidRequest(String),

    #[error("unexpected http status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("response exceeds the limit of {limit} bytes")]
    ResponseTooLarge { limit: usize },

    /// The response body isn't a JSON-RPC response.
    #[error("malformed response: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error(transparent)]
    InvalidParams(#[from] InvalidParams),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("response body is not valid utf-8")]
    InvalidUtf8,

    /// The task driving the round trip was dropped before it completed.
    #[error("request dispatch failed: {0}")]
    Dispatch(String),

    #[error("{0}")]
    Custom(String),
}

/// Failure of a single typed call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The result couldn't be decoded into the expected type.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The node answered with a JSON-RPC error object.
    #[error("rpc error {0}")]
    Rpc(#[from] RpcError),

    /// An envelope arrived for an id no call is waiting for.
    #[error("response for unknown request id {0}")]
    UnknownResponseId(u64),
}

impl Error {
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    #[must_use]
    pub const fn as_rpc_error(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc(error) => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(error) => Some(error),
            _ => None,
        }
    }
}

impl From<InvalidParams> for Error {
    fn from(error: InvalidParams) -> Self {
        Self::Transport(TransportError::InvalidParams(error))
    }
}

#[cfg(feature = "http")]
impl From<hyper::Error> for Error {
    fn from(error: hyper::Error) -> Self {
        Self::Transport(TransportError::Http(error))
    }
}
