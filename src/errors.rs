use thiserror::Error;
use crate::types::{Address, TokenId};

/// Failure of a public engine operation. Every variant aborts the operation with no state change.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MintError {
    #[error("CBAs are only 999")]
    CodeOutOfRange(u64),

    #[error("the contract is paused")]
    SystemPaused,

    #[error("signature is incorrect")]
    UnauthorizedSignature,

    #[error("the tokenId is minted")]
    AlreadyMinted(TokenId),

    #[error("caller is not the administrator")]
    NotAuthorized { caller: Address },

    #[error("treasury balance overflow")]
    TreasuryOverflow,

    #[error("payout transfer failed: {0}")]
    PayoutFailed(#[source] PayoutError),

    #[error("registry rejected issuance: {0}")]
    Registry(#[from] RegistryError),
}

/// Why a signature could not be turned into a signer address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    #[error("malformed r/s scalars")]
    MalformedScalars,

    #[error("non-canonical signature: s is in the upper half of the curve order")]
    HighS,

    #[error("public key recovery failed")]
    RecoveryFailed,

    #[error("signing failed")]
    SigningFailed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("token {0} already has an owner")]
    TokenExists(TokenId),

    #[error("token {0} appears twice in one batch")]
    DuplicateToken(TokenId),

    #[error("token {0} has no owner")]
    NonexistentToken(TokenId),

    #[error("cannot assign token {0} to the zero address")]
    ZeroOwner(TokenId),
}

/// Reported by the payout destination when a sweep transfer cannot be delivered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PayoutError(pub String);
