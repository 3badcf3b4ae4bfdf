use serde::{de::DeserializeOwned, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Failed to encode the parameters of a call.
#[derive(Debug, thiserror::Error)]
#[error("invalid params: {0}")]
pub struct InvalidParams(#[from] pub serde_json::Error);

/// Positional parameters of a JSON-RPC call, always a JSON array.
#[derive(Clone, Debug)]
pub struct RpcParams(Box<RawValue>);

impl RpcParams {
    /// Empty parameter list, `[]`.
    ///
    /// # Errors
    /// Never fails in practice, kept fallible to share the signature of
    /// [`RpcParams::from_serializable`].
    pub fn empty() -> Result<Self, InvalidParams> {
        let raw = RawValue::from_string("[]".to_string())?;
        Ok(Self(raw))
    }

    /// Encodes `params`, which must serialize as a JSON array (a tuple, slice or `Vec`).
    ///
    /// # Errors
    /// Returns [`InvalidParams`] if serialization fails or the value isn't an array.
    pub fn from_serializable<P>(params: &P) -> Result<Self, InvalidParams>
    where
        P: Serialize + ?Sized,
    {
        let raw = serde_json::value::to_raw_value(params)?;
        if !raw.get().starts_with('[') {
            return Err(InvalidParams(serde::ser::Error::custom(
                "positional params must be a json array",
            )));
        }
        Ok(Self(raw))
    }

    /// Raw JSON text of the parameter array.
    #[must_use]
    pub fn get(&self) -> &str {
        self.0.get()
    }

    #[must_use]
    pub fn as_raw(&self) -> &RawValue {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Box<RawValue> {
        self.0
    }

    /// Decodes the parameters back into `T`, used by mock clients and servers.
    ///
    /// # Errors
    /// Returns [`InvalidParams`] if the array doesn't match `T`.
    pub fn deserialize_as<T: DeserializeOwned>(&self) -> Result<T, InvalidParams> {
        Ok(serde_json::from_str(self.0.get())?)
    }
}

impl Serialize for RpcParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl Display for RpcParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.0.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc_params;
    use ethrpc_types::{Address, AtBlock};
    use hex_literal::hex;

    #[test]
    fn params_are_positional() {
        let address = Address::from(hex!("1a94fce7ef36bc90959e206ba569a12afbc91ca1"));
        let params = rpc_params![address, AtBlock::Latest].unwrap();
        assert_eq!(
            params.to_string(),
            r#"["0x1a94fce7ef36bc90959e206ba569a12afbc91ca1","latest"]"#
        );
        let single = rpc_params![AtBlock::from(16u64)].unwrap();
        assert_eq!(single.get(), r#"["0x10"]"#);
        assert_eq!(rpc_params![].unwrap().get(), "[]");
        assert_eq!(RpcParams::empty().unwrap().get(), "[]");
    }

    #[test]
    fn rejects_non_array_params() {
        assert!(RpcParams::from_serializable(&"latest").is_err());
        let decoded: (String, bool) = rpc_params!["0x1", true].unwrap().deserialize_as().unwrap();
        assert_eq!(decoded, ("0x1".to_string(), true));
    }
}
