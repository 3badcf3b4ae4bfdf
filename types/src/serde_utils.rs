use impl_serde::serialize::{deserialize_check_len, serialize_uint, ExpectedLen};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// serde functions for converting `u64` to and from hexadecimal string
pub mod uint_to_hex {
    use super::{DeserializableNumber, SerializableNumber};
    use serde::{Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    /// # Errors
    /// Returns `Err` if the value cannot be encoded as bytes
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: SerializableNumber,
        S: Serializer,
    {
        T::serialize_eth_uint(value, serializer)
    }

    /// # Errors
    /// Returns `Err` source is not a valid hexadecimal string
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: DeserializableNumber<'de>,
        D: Deserializer<'de>,
    {
        T::deserialize_eth_uint(deserializer)
    }
}

/// Deserialize that always returns `Some(T)` or `Some(T::default())` must be used with
/// `#[serde(deserialize_with = "deserialize_null_default")]` attribute
///
/// # Errors
/// returns an error if fails to deserialize T
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    let opt = <Option<T> as Deserialize<'de>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Serialize a primitive uint as hexadecimal string, must be used with `#[serde(serialize_with =
/// "serialize_uint")]` attribute
pub trait SerializableNumber {
    /// Serialize a primitive uint as hexadecimal string
    /// # Errors
    /// should never fails
    fn serialize_eth_uint<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer;
}

impl<T> SerializableNumber for Option<T>
where
    T: SerializableNumber,
{
    fn serialize_eth_uint<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wrapped = self.as_ref().map(SerializeWrapper);
        <Option<SerializeWrapper<T>> as Serialize>::serialize(&wrapped, serializer)
    }
}

pub trait DeserializableNumber<'de>: Sized {
    /// Deserialize a primitive uint from hexadecimal string
    /// # Errors
    /// fails if the source isn't a hexadecimal string or overflows `Self`
    fn deserialize_eth_uint<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>;
}

impl<'de, T> DeserializableNumber<'de> for Option<T>
where
    T: DeserializableNumber<'de>,
{
    fn deserialize_eth_uint<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wrapped =
            <Option<DeserializeWrapper<T>> as Deserialize<'de>>::deserialize(deserializer)?;
        Ok(wrapped.map(|wrapper| wrapper.0))
    }
}

/// Helper for deserializing optional uints from hexadecimal string
struct DeserializeWrapper<T>(T);

impl<'de, T> Deserialize<'de> for DeserializeWrapper<T>
where
    T: DeserializableNumber<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <T as DeserializableNumber<'de>>::deserialize_eth_uint(deserializer)?;
        Ok(Self(value))
    }
}

/// Helper for serializing optional uints to hexadecimal string
struct SerializeWrapper<'a, T>(&'a T);

impl<'a, T> Serialize for SerializeWrapper<'a, T>
where
    T: SerializableNumber,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        <T as SerializableNumber>::serialize_eth_uint(self.0, serializer)
    }
}

// Node responses are decoded leniently, leading zeros are accepted but an empty "0x" isn't. The
// strict canonical form is enforced by `codec` for plain quantity results.
macro_rules! impl_serialize_uint {
    ($name: ident) => {
        impl SerializableNumber for $name {
            fn serialize_eth_uint<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                const BITS: usize = $name::BITS as usize;

                let mut slice = [0u8; 2 + 2 * (BITS / 8)];
                let bytes = self.to_be_bytes();
                serialize_uint(&mut slice, &bytes, serializer)
            }
        }

        impl<'de> DeserializableNumber<'de> for $name {
            fn deserialize_eth_uint<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                const BITS: usize = $name::BITS as usize;
                let mut bytes = [0u8; BITS / 8];
                let wrote =
                    deserialize_check_len(deserializer, ExpectedLen::Between(0, &mut bytes))?;
                let shift = u32::try_from(BITS - (wrote * 8)).unwrap_or(u32::MAX);
                Ok($name::from_be_bytes(bytes).checked_shr(shift).unwrap_or(0))
            }
        }
    };
}

impl_serialize_uint!(u8);
impl_serialize_uint!(u32);
impl_serialize_uint!(u64);
impl_serialize_uint!(u128);

#[cfg(test)]
mod tests {
    use super::uint_to_hex;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Quantities {
        #[serde(with = "uint_to_hex")]
        number: u64,
        #[serde(default, with = "uint_to_hex", skip_serializing_if = "Option::is_none")]
        optional: Option<u64>,
    }

    #[test]
    fn serializes_minimal_hex() {
        let value = Quantities { number: 0, optional: Some(0x1234) };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, json!({ "number": "0x0", "optional": "0x1234" }));
        let value = Quantities { number: 255, optional: None };
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({ "number": "0xff" }));
    }

    #[test]
    fn serializes_widest_values() {
        #[derive(Serialize)]
        struct Wide {
            #[serde(with = "uint_to_hex")]
            value: u128,
        }
        let json = serde_json::to_value(Wide { value: u128::MAX }).unwrap();
        assert_eq!(json, json!({ "value": format!("0x{}", "f".repeat(32)) }));
        let value = Quantities { number: u64::MAX, optional: Some(u64::MAX - 1) };
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({ "number": "0xffffffffffffffff", "optional": "0xfffffffffffffffe" })
        );
    }

    #[test]
    fn deserializes_node_output() {
        let decoded: Quantities =
            serde_json::from_value(json!({ "number": "0x0000000000000042", "optional": null }))
                .unwrap();
        assert_eq!(decoded, Quantities { number: 0x42, optional: None });
        assert!(serde_json::from_value::<Quantities>(json!({ "number": "0x" })).is_err());
        let decoded: Quantities =
            serde_json::from_value(json!({ "number": "0xabc", "optional": "0x1" })).unwrap();
        assert_eq!(decoded, Quantities { number: 0xabc, optional: Some(1) });
        assert!(serde_json::from_value::<Quantities>(json!({ "number": "0x10000000000000000" }))
            .is_err());
    }
}
