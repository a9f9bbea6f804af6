use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use mosaic_primitives::{constants::MESSAGE_SEPARATOR, ct_eq_address, keccak256, personal_message_digest};
use crate::{
    errors::SignatureError,
    types::{Address, Hash256, RecoverableSignature},
};

/// m = decimal(code) || "|" || lowercase_hex(requester)
#[must_use]
pub fn redemption_message(code: u64, requester: &Address) -> String {
    format!("{code}{MESSAGE_SEPARATOR}{}", requester.to_lower_hex())
}

/// H = keccak256(m)
#[must_use]
pub fn redemption_hash(code: u64, requester: &Address) -> Hash256 {
    keccak256(redemption_message(code, requester).as_bytes())
}

/// D = keccak256( "\x19Ethereum Signed Message:\n32" || H )
///
/// The signing tool signs the 32 bytes of `H` as a personal message, so `D` is the prehash.
#[must_use]
pub fn redemption_digest(code: u64, requester: &Address) -> Hash256 {
    personal_message_digest(&redemption_hash(code, requester))
}

/// Account address of a secp256k1 verifying key.
#[must_use]
pub fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    Address::from_key_body(&point.as_bytes()[1..])
}

/// Recover the address that produced `signature` over the 32-byte `digest`.
///
/// `v` may be 27/28 or 0/1. Upper-half `s` values are rejected so each
/// authorization has exactly one accepted encoding.
///
/// # Errors
///
/// Returns `SignatureError` if the signature is not 65 bytes, `v` is not a valid
/// recovery id, the scalars are malformed or non-canonical, or no key recovers.
pub fn recover_signer(digest: &Hash256, signature: &[u8]) -> Result<Address, SignatureError> {
    let sig = RecoverableSignature::try_from(signature)?;
    let rec_byte = match sig.v() {
        v @ (27 | 28) => v - 27,
        v @ (0 | 1) => v,
        other => return Err(SignatureError::InvalidRecoveryId(other)),
    };
    let rec_id = RecoveryId::from_byte(rec_byte).ok_or(SignatureError::InvalidRecoveryId(sig.v()))?;
    let ecdsa = Signature::from_slice(sig.rs()).map_err(|_| SignatureError::MalformedScalars)?;
    if ecdsa.normalize_s().is_some() {
        return Err(SignatureError::HighS);
    }
    let key = VerifyingKey::recover_from_prehash(digest, &ecdsa, rec_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;
    Ok(address_of(&key))
}

/// Check that `signature` authorizes `requester` to redeem `code` on behalf of `signer`.
///
/// # Errors
///
/// Returns the recovery failure, if any. A well-formed signature from another key
/// yields `Ok(false)`.
pub fn verify_redemption(
    code: u64,
    requester: &Address,
    signature: &[u8],
    signer: &Address,
) -> Result<bool, SignatureError> {
    let recovered = recover_signer(&redemption_digest(code, requester), signature)?;
    Ok(ct_eq_address(&recovered, signer))
}

/// Produce the signature the off-chain tool would hand to `requester` for `code`.
///
/// # Errors
///
/// Returns `SignatureError::SigningFailed` if the ECDSA backend rejects the prehash.
pub fn sign_redemption(
    key: &SigningKey,
    code: u64,
    requester: &Address,
) -> Result<RecoverableSignature, SignatureError> {
    let digest = redemption_digest(code, requester);
    let (sig, rec_id) = key
        .sign_prehash_recoverable(&digest)
        .map_err(|_| SignatureError::SigningFailed)?;
    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&sig.to_bytes());
    out[64] = 27 + rec_id.to_byte();
    Ok(RecoverableSignature(out))
}
