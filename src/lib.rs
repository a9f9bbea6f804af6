#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Crypto Baby Animals Mosaic issuance engine.
//!
//! One redemption code in `1..=999` issues three identifiers (`code*10`,
//! `code*10+1`, `code*10+2`): the first two to the redeemer, the third to the
//! issuing system. A redemption is authorized by a recoverable secp256k1
//! signature from the recorded signer over the personal-message digest of
//! `keccak256("<code>|<lowercase requester address>")`.

// Fixed choices:
// - Hash: Keccak-256
// - Signature: secp256k1 ECDSA, 65-byte r||s||v, low-s only
// - Identity: last 20 bytes of keccak256(uncompressed public key)
// - Locators: base prefix || decimal id || ".json", computed on read

pub mod types;
pub mod errors;
pub mod config;
pub mod signature;
pub mod pause;
pub mod allocator;
pub mod treasury;
pub mod metadata;
pub mod access;
pub mod registry;
pub mod events;
pub mod engine;

pub use types::*;
pub use errors::{MintError, PayoutError, RegistryError, SignatureError};
pub use config::EngineConfig;
pub use signature::{address_of, recover_signer, redemption_digest, redemption_message, sign_redemption, verify_redemption};
pub use allocator::{derive_triple, IdentifierAllocator};
pub use registry::{Grant, MemoryRegistry, OwnershipRegistry};
pub use events::EngineEvent;
pub use engine::{MosaicEngine, RedeemStage};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
