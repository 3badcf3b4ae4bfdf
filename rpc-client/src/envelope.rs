//! JSON-RPC 2.0 request and response envelopes.
use crate::error::RpcError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

pub const JSONRPC_VERSION: &str = "2.0";

/// The error member of a response.
pub type ErrorObject = RpcError;

/// A method call, `params` is always a positional array.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a RawValue,
}

impl<'a> Request<'a> {
    #[must_use]
    pub const fn new(id: u64, method: &'a str, params: &'a RawValue) -> Self {
        Self { jsonrpc: JSONRPC_VERSION, id, method, params }
    }
}

/// Outcome carried by a response.
#[derive(Debug)]
pub enum Payload {
    /// The undecoded `result` member.
    Success(Box<RawValue>),
    Error(ErrorObject),
}

impl Payload {
    /// # Errors
    /// Returns the error object if the call failed.
    pub fn into_result(self) -> Result<Box<RawValue>, ErrorObject> {
        match self {
            Self::Success(result) => Ok(result),
            Self::Error(error) => Err(error),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// A response envelope, `id` is `None` when the server couldn't read the request id.
#[derive(Debug, Deserialize)]
#[serde(try_from = "RawResponse")]
pub struct Response {
    pub id: Option<u64>,
    pub payload: Payload,
}

impl Response {
    /// Parses a response body.
    ///
    /// # Errors
    /// Returns an error if the body isn't a single JSON-RPC response object.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default, deserialize_with = "some_raw")]
    result: Option<Box<RawValue>>,
    #[serde(default)]
    error: Option<ErrorObject>,
}

impl TryFrom<RawResponse> for Response {
    type Error = &'static str;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        // a response carrying both members is treated as failed
        let payload = match (raw.error, raw.result) {
            (Some(error), _) => Payload::Error(error),
            (None, Some(result)) => Payload::Success(result),
            (None, None) => return Err("response has neither result nor error"),
        };
        Ok(Self { id: raw.id, payload })
    }
}

/// Keeps `"result": null` as `Some(null)` so it isn't confused with a missing member.
fn some_raw<'de, D>(deserializer: D) -> Result<Option<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    <Box<RawValue> as Deserialize<'de>>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_positional() {
        let params = RawValue::from_string(r#"["0x1",false]"#.to_string()).unwrap();
        let request = Request::new(7, "eth_getBlockByNumber", &params);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"jsonrpc":"2.0","id":7,"method":"eth_getBlockByNumber","params":["0x1",false]}"#
        );
    }

    #[test]
    fn parses_success_and_null_result() {
        let response = Response::parse(r#"{"jsonrpc":"2.0","id":3,"result":"0x3039"}"#).unwrap();
        assert_eq!(response.id, Some(3));
        let Payload::Success(result) = response.payload else { panic!("expected success") };
        assert_eq!(result.get(), r#""0x3039""#);

        let response = Response::parse(r#"{"jsonrpc":"2.0","id":4,"result":null}"#).unwrap();
        let Payload::Success(result) = response.payload else { panic!("expected success") };
        assert_eq!(result.get(), "null");
    }

    #[test]
    fn parses_error_objects() {
        let body = r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32700,"message":"Parse error"}}"#;
        let response = Response::parse(body).unwrap();
        assert_eq!(response.id, None);
        let error = response.payload.into_result().unwrap_err();
        assert_eq!(error.code, -32700);
        assert_eq!(error.message, "Parse error");

        let body = r#"{"id":1,"error":{"code":-32601,"message":"the method eth_foo does not exist","data":{"x":1}}}"#;
        let response = Response::parse(body).unwrap();
        assert!(response.payload.is_error());
    }

    #[test]
    fn rejects_malformed_envelopes() {
        assert!(Response::parse(r#"{"jsonrpc":"2.0","id":1}"#).is_err());
        assert!(Response::parse(r#"{"jsonrpc":"2.0","id":1,"result":"#).is_err());
        assert!(Response::parse(r#"{"jsonrpc":"2.0","id":"abc","result":1}"#).is_err());
        assert!(Response::parse("<html>bad gateway</html>").is_err());
    }
}
