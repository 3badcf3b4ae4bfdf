//! Strict codecs for the hex encodings used on the Ethereum JSON-RPC wire.
//!
//! A *quantity* is an unsigned integer rendered as `0x` followed by lowercase
//! hex digits without leading zeros (zero is `0x0`). *Data* is an arbitrary
//! byte string rendered as `0x` followed by two hex digits per byte.
use crate::{bytes::Bytes, U256};

/// Failure to decode a hex quantity, byte string, address or result payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("empty hex string")]
    Empty,
    #[error("hex string must start with 0x")]
    MissingPrefix,
    #[error("invalid hex character {character:?} at position {index}")]
    InvalidHex { character: char, index: usize },
    #[error("odd number of hex digits")]
    OddLength,
    #[error("quantity has leading zeros")]
    LeadingZeros,
    #[error("quantity does not fit in {bits} bits")]
    Overflow { bits: u32 },
    #[error("expected {expected} hex digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid checksum, expected {expected}")]
    ChecksumMismatch { expected: String },
    #[error("unexpected payload: {0}")]
    Json(String),
}

/// Strips the mandatory `0x` prefix.
///
/// # Errors
/// Returns [`DecodeError::Empty`] for an empty string and [`DecodeError::MissingPrefix`] when the
/// prefix is absent.
pub fn strip_hex_prefix(value: &str) -> Result<&str, DecodeError> {
    if value.is_empty() {
        return Err(DecodeError::Empty);
    }
    value.strip_prefix("0x").ok_or(DecodeError::MissingPrefix)
}

/// Checks every character of `digits` is a hex digit, `offset` is added to the reported index.
pub(crate) fn check_hex_digits(digits: &str, offset: usize) -> Result<(), DecodeError> {
    match digits.char_indices().find(|(_, character)| !character.is_ascii_hexdigit()) {
        Some((index, character)) => Err(DecodeError::InvalidHex { character, index: index + offset }),
        None => Ok(()),
    }
}

/// Returns the significant digits of a quantity, rejecting non-canonical encodings.
fn quantity_digits(value: &str, bits: u32) -> Result<&str, DecodeError> {
    let digits = strip_hex_prefix(value)?;
    if digits.is_empty() {
        return Err(DecodeError::Empty);
    }
    check_hex_digits(digits, 2)?;
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(DecodeError::LeadingZeros);
    }
    if digits.len() > (bits / 4) as usize {
        return Err(DecodeError::Overflow { bits });
    }
    Ok(digits)
}

/// Encodes a 256-bit quantity, `0` encodes as `0x0`.
#[must_use]
pub fn encode_quantity(value: U256) -> String {
    format!("{value:#x}")
}

/// Decodes a 256-bit quantity.
///
/// # Errors
/// Returns [`DecodeError`] if `value` isn't a canonical quantity or exceeds 256 bits.
pub fn decode_quantity(value: &str) -> Result<U256, DecodeError> {
    let digits = quantity_digits(value, 256)?;
    U256::from_str_radix(digits, 16).map_err(|_| DecodeError::Overflow { bits: 256 })
}

/// Encodes a 64-bit quantity, `0` encodes as `0x0`.
#[must_use]
pub fn encode_u64(value: u64) -> String {
    format!("{value:#x}")
}

/// Decodes a 64-bit quantity such as a block number, nonce or count.
///
/// # Errors
/// Returns [`DecodeError`] if `value` isn't a canonical quantity or exceeds 64 bits.
pub fn decode_u64(value: &str) -> Result<u64, DecodeError> {
    let digits = quantity_digits(value, 64)?;
    u64::from_str_radix(digits, 16).map_err(|_| DecodeError::Overflow { bits: 64 })
}

/// Encodes a byte string, the empty slice encodes as `0x`.
#[must_use]
pub fn encode_bytes(bytes: &[u8]) -> String {
    const_hex::encode_prefixed(bytes)
}

/// Decodes a `0x` prefixed byte string with an even number of digits.
///
/// # Errors
/// Returns [`DecodeError`] if the prefix is missing, a digit isn't hex or the length is odd.
pub fn decode_bytes(value: &str) -> Result<Bytes, DecodeError> {
    let digits = strip_hex_prefix(value)?;
    check_hex_digits(digits, 2)?;
    if digits.len() % 2 != 0 {
        return Err(DecodeError::OddLength);
    }
    let bytes = const_hex::decode(digits).map_err(|_| DecodeError::OddLength)?;
    Ok(Bytes::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_encoded_as_single_digit() {
        assert_eq!(encode_quantity(U256::zero()), "0x0");
        assert_eq!(encode_u64(0), "0x0");
        assert_eq!(decode_quantity("0x0").unwrap(), U256::zero());
    }

    #[test]
    fn quantity_round_trip() {
        let values = [
            U256::one(),
            U256::from(0x3039),
            U256::from(u64::MAX),
            U256::from(u128::MAX) + 1,
            U256::MAX,
        ];
        for value in values {
            let encoded = encode_quantity(value);
            assert!(!encoded[2..].starts_with('0'), "{encoded} has leading zeros");
            assert_eq!(decode_quantity(&encoded).unwrap(), value);
        }
        assert_eq!(encode_quantity(U256::from(12345)), "0x3039");
        assert_eq!(encode_u64(1024), "0x400");
        assert_eq!(decode_u64("0x400").unwrap(), 1024);
        assert_eq!(decode_u64(&encode_u64(u64::MAX)).unwrap(), u64::MAX);
    }

    #[test]
    fn rejects_malformed_quantities() {
        assert_eq!(decode_quantity(""), Err(DecodeError::Empty));
        assert_eq!(decode_quantity("0x"), Err(DecodeError::Empty));
        assert_eq!(decode_quantity("400"), Err(DecodeError::MissingPrefix));
        assert_eq!(decode_quantity("0x0400"), Err(DecodeError::LeadingZeros));
        assert_eq!(decode_quantity("0x00"), Err(DecodeError::LeadingZeros));
        assert_eq!(
            decode_quantity("0x4g"),
            Err(DecodeError::InvalidHex { character: 'g', index: 3 })
        );
        let too_big = format!("0x1{}", "0".repeat(64));
        assert_eq!(decode_quantity(&too_big), Err(DecodeError::Overflow { bits: 256 }));
        assert_eq!(
            decode_u64("0x10000000000000000"),
            Err(DecodeError::Overflow { bits: 64 })
        );
    }

    #[test]
    fn bytes_round_trip() {
        for encoded in ["0x", "0x00", "0xdeadbeef", "0x0001020304ff"] {
            let decoded = decode_bytes(encoded).unwrap();
            assert_eq!(encode_bytes(&decoded), encoded);
        }
        assert_eq!(decode_bytes("0x").unwrap().len(), 0);
        assert_eq!(&decode_bytes("0xdeadbeef").unwrap()[..], &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn rejects_malformed_bytes() {
        assert_eq!(decode_bytes("0xabc"), Err(DecodeError::OddLength));
        assert_eq!(decode_bytes("0x0"), Err(DecodeError::OddLength));
        assert_eq!(decode_bytes("abcd"), Err(DecodeError::MissingPrefix));
        assert_eq!(decode_bytes(""), Err(DecodeError::Empty));
        assert_eq!(
            decode_bytes("0xzz"),
            Err(DecodeError::InvalidHex { character: 'z', index: 2 })
        );
    }
}
