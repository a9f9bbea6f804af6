#![forbid(unsafe_code)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::multiple_crate_versions
)]

//! Mosaic primitives: Keccak-256 hashing, personal-message digests and account addresses.
//
// Shared by the issuance engine, its benches and fuzz targets:
//
// - Keccak-256 over one or more byte slices
// - Personal-message digest (`0x19` prefix, decimal length framing)
// - 20-byte account addresses derived from secp256k1 public keys
// - Constant-time equality for addresses

use core::fmt;
use core::str::FromStr;
use sha3::{Digest, Keccak256};
use subtle::ConstantTimeEq;
use thiserror::Error;

pub mod constants;

use constants::{ADDRESS_LEN, PERSONAL_MESSAGE_PREFIX, UNCOMPRESSED_PUBLIC_KEY_LEN};

/// 32-byte Keccak-256 digest.
pub type Hash256 = [u8; 32];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PrimitiveError {
    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("address must start with 0x")]
    MissingHexPrefix,

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("public key is not an uncompressed SEC1 point")]
    NotUncompressed,
}

/// Keccak-256 of a single byte slice.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash256 {
    keccak256_parts(&[data])
}

/// Keccak-256 of the concatenation of `parts`, without framing.
#[must_use]
pub fn keccak256_parts(parts: &[&[u8]]) -> Hash256 {
    let mut hasher = Keccak256::new();
    for p in parts {
        hasher.update(p);
    }
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// `keccak256(PREFIX || decimal(len(message)) || message)`
///
/// This is the digest a wallet signs when asked to sign `message` as a personal message.
#[must_use]
pub fn personal_message_digest(message: &[u8]) -> Hash256 {
    let len = message.len().to_string();
    keccak256_parts(&[PERSONAL_MESSAGE_PREFIX, len.as_bytes(), message])
}

/// A 20-byte account address.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Address of a secp256k1 key given its SEC1 uncompressed encoding.
    pub fn from_uncompressed_key(point: &[u8]) -> Result<Self, PrimitiveError> {
        if point.len() != UNCOMPRESSED_PUBLIC_KEY_LEN {
            return Err(PrimitiveError::InvalidLength {
                expected: UNCOMPRESSED_PUBLIC_KEY_LEN,
                got: point.len(),
            });
        }
        if point[0] != 0x04 {
            return Err(PrimitiveError::NotUncompressed);
        }
        Ok(Self::from_key_body(&point[1..]))
    }

    /// Address from the 64-byte `x || y` body of a public key: the last 20 bytes of its hash.
    #[must_use]
    pub fn from_key_body(xy: &[u8]) -> Self {
        let h = keccak256(xy);
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(&h[32 - ADDRESS_LEN..]);
        Self(out)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        ct_eq_address(self, &Self::ZERO)
    }

    /// Lowercase `0x`-prefixed hex, the form embedded in redemption messages.
    #[must_use]
    pub fn to_lower_hex(&self) -> String {
        let mut s = String::with_capacity(2 + 2 * ADDRESS_LEN);
        s.push_str("0x");
        s.push_str(&hex::encode(self.0));
        s
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(b: [u8; ADDRESS_LEN]) -> Self {
        Self(b)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = PrimitiveError;
    fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
        if b.len() != ADDRESS_LEN {
            return Err(PrimitiveError::InvalidLength { expected: ADDRESS_LEN, got: b.len() });
        }
        let mut arr = [0u8; ADDRESS_LEN];
        arr.copy_from_slice(b);
        Ok(Self(arr))
    }
}

/// Accepts `0x`/`0X` followed by 40 hex digits in any case.
impl FromStr for Address {
    type Err = PrimitiveError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(PrimitiveError::MissingHexPrefix)?;
        let mut out = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut out)?;
        Ok(Self(out))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lower_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_lower_hex())
    }
}

/// Constant-time equality for two addresses.
#[must_use]
pub fn ct_eq_address(a: &Address, b: &Address) -> bool {
    a.0.ct_eq(&b.0).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn keccak_empty_vector() {
        assert_eq!(
            keccak256(b""),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn parts_hash_like_concatenation() {
        assert_eq!(keccak256_parts(&[b"ab", b"c"]), keccak256(b"abc"));
        assert_eq!(keccak256_parts(&[]), keccak256(b""));
    }

    #[test]
    fn personal_digest_vector() {
        assert_eq!(
            personal_message_digest(b"Hello World"),
            hex!("a1de988600a42c4b4ab089b619297c17d53cffae5d5120d82d8a92d0bb3b78f2")
        );
    }

    #[test]
    fn address_text_roundtrip_is_lowercase() {
        let a: Address = "0xF39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap();
        assert_eq!(a.to_string(), "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        assert_eq!(a.to_string().parse::<Address>().unwrap(), a);
    }

    #[test]
    fn address_parse_rejects_bad_input() {
        assert_eq!(
            "f39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse::<Address>(),
            Err(PrimitiveError::MissingHexPrefix)
        );
        assert_eq!(
            "0x1234".parse::<Address>(),
            Err(PrimitiveError::Hex(hex::FromHexError::InvalidStringLength))
        );
        assert_eq!(
            "0xzz9fd6e51aad88f6f4ce6ab8827279cfffb92266".parse::<Address>(),
            Err(PrimitiveError::Hex(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }))
        );
    }

    #[test]
    fn uncompressed_key_checks_shape() {
        assert_eq!(
            Address::from_uncompressed_key(&[4u8; 33]),
            Err(PrimitiveError::InvalidLength { expected: 65, got: 33 })
        );
        assert_eq!(Address::from_uncompressed_key(&[2u8; 65]), Err(PrimitiveError::NotUncompressed));
        let mut point = [7u8; 65];
        point[0] = 4;
        assert_eq!(Address::from_uncompressed_key(&point).unwrap(), Address::from_key_body(&point[1..]));
    }

    #[test]
    fn zero_address() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address([1u8; 20]).is_zero());
        assert!(ct_eq_address(&Address([9u8; 20]), &Address([9u8; 20])));
    }
}
