//! EIP-55 mixed-case checksum address encoding.
use crate::{
    codec::{check_hex_digits, strip_hex_prefix, DecodeError},
    Address,
};
use sha3::Digest;

/// Whether [`parse_address`] enforces the EIP-55 casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Checksum {
    /// The casing must equal the EIP-55 casing exactly.
    #[default]
    Validate,
    /// Any casing is accepted.
    Ignore,
}

/// Renders `address` with EIP-55 checksum casing.
#[must_use]
pub fn to_checksum(address: &Address) -> String {
    let address = const_hex::encode(address.as_bytes());
    let hashed_address = const_hex::encode(sha3::Keccak256::digest(address.as_bytes()));
    let mut result = String::with_capacity(42);
    result.push_str("0x");
    for (nibble_index, mut character) in address.chars().enumerate() {
        // hex digits `8`..`f` sort after `7` in ascii
        if character.is_ascii_alphabetic() && hashed_address.as_bytes()[nibble_index] > b'7' {
            character = character.to_ascii_uppercase();
        }
        result.push(character);
    }
    result
}

/// Parses a `0x` prefixed 40 digit address.
///
/// # Errors
/// Returns [`DecodeError`] if the string isn't a hex address, or if `checksum` is
/// [`Checksum::Validate`] and the casing differs from [`to_checksum`].
pub fn parse_address(value: &str, checksum: Checksum) -> Result<Address, DecodeError> {
    let digits = strip_hex_prefix(value)?;
    check_hex_digits(digits, 2)?;
    if digits.len() != 40 {
        return Err(DecodeError::InvalidLength { expected: 40, actual: digits.len() });
    }
    let mut bytes = [0u8; 20];
    const_hex::decode_to_slice(digits, &mut bytes).map_err(|_| DecodeError::OddLength)?;
    let address = Address::from(bytes);
    if checksum == Checksum::Validate {
        let expected = to_checksum(&address);
        if expected[2..] != *digits {
            return Err(DecodeError::ChecksumMismatch { expected });
        }
    }
    Ok(address)
}
