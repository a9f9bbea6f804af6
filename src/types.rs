use crate::errors::{MintError, SignatureError};

pub use mosaic_primitives::constants::{
    IDENTIFIER_STRIDE, MAX_REDEMPTION_CODE, MIN_REDEMPTION_CODE, RECOVERABLE_SIGNATURE_LEN,
};
pub use mosaic_primitives::{Address, Hash256};

/// Collectible identifier as recorded by the ownership registry.
pub type TokenId = u64;
/// Payment and treasury amounts, in the smallest currency unit.
pub type Amount = u128;

/// A redemption code known to lie in `[MIN_REDEMPTION_CODE, MAX_REDEMPTION_CODE]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct RedemptionCode(u64);

impl RedemptionCode {
    /// # Errors
    ///
    /// Returns `MintError::CodeOutOfRange` outside `1..=999`.
    pub const fn new(raw: u64) -> Result<Self, MintError> {
        if raw < MIN_REDEMPTION_CODE || raw > MAX_REDEMPTION_CODE {
            return Err(MintError::CodeOutOfRange(raw));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// `code*10`, `code*10+1`, `code*10+2`. Disjoint across codes because the stride exceeds 3.
    #[must_use]
    pub const fn triple(self) -> IdentifierTriple {
        let base = self.0 * IDENTIFIER_STRIDE;
        IdentifierTriple { primary: base, secondary: base + 1, reserved: base + 2 }
    }
}

impl TryFrom<u64> for RedemptionCode {
    type Error = MintError;
    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

/// The three identifiers issued for one redemption code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IdentifierTriple {
    /// Delivered to the redeemer.
    pub primary: TokenId,
    /// Delivered to the redeemer.
    pub secondary: TokenId,
    /// Retained by the issuing system.
    pub reserved: TokenId,
}

impl IdentifierTriple {
    #[must_use]
    pub const fn ids(&self) -> [TokenId; 3] {
        [self.primary, self.secondary, self.reserved]
    }
}

/// 65-byte recoverable ECDSA signature: r(32) || s(32) || v(1).
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct RecoverableSignature(pub [u8; RECOVERABLE_SIGNATURE_LEN]);

impl RecoverableSignature {
    #[must_use]
    pub fn rs(&self) -> &[u8] {
        &self.0[..64]
    }

    #[must_use]
    pub const fn v(&self) -> u8 {
        self.0[64]
    }

    #[must_use]
    pub const fn to_bytes(&self) -> [u8; RECOVERABLE_SIGNATURE_LEN] {
        self.0
    }
}

impl TryFrom<&[u8]> for RecoverableSignature {
    type Error = SignatureError;
    fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
        if b.len() != RECOVERABLE_SIGNATURE_LEN {
            return Err(SignatureError::InvalidLength { expected: RECOVERABLE_SIGNATURE_LEN, got: b.len() });
        }
        let mut arr = [0u8; RECOVERABLE_SIGNATURE_LEN];
        arr.copy_from_slice(b);
        Ok(Self(arr))
    }
}

impl core::fmt::Debug for RecoverableSignature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RecoverableSignature(0x")?;
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_bounds() {
        assert_eq!(RedemptionCode::new(0), Err(MintError::CodeOutOfRange(0)));
        assert_eq!(RedemptionCode::new(1000), Err(MintError::CodeOutOfRange(1000)));
        assert_eq!(RedemptionCode::new(1).map(RedemptionCode::get), Ok(1));
        assert_eq!(RedemptionCode::try_from(999).map(RedemptionCode::get), Ok(999));
    }

    #[test]
    fn triple_layout() {
        let t = RedemptionCode::new(1).unwrap().triple();
        assert_eq!(t.ids(), [10, 11, 12]);
        assert_eq!((t.primary, t.secondary, t.reserved), (10, 11, 12));
        assert_eq!(RedemptionCode::new(999).unwrap().triple().ids(), [9990, 9991, 9992]);
    }

    #[test]
    fn signature_length_is_exact() {
        assert_eq!(
            RecoverableSignature::try_from(&[0u8; 64][..]),
            Err(SignatureError::InvalidLength { expected: 65, got: 64 })
        );
        let sig = RecoverableSignature::try_from(&[3u8; 65][..]).unwrap();
        assert_eq!(sig.v(), 3);
        assert_eq!(sig.rs().len(), 64);
    }
}
