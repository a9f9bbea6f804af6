#![no_main]

use k256::ecdsa::SigningKey;
use libfuzzer_sys::fuzz_target;
use mosaic_engine::{address_of, sign_redemption, Address, EngineConfig, MintError, MosaicEngine};

const ADMIN: Address = Address([0xad; 20]);

fuzz_target!(|data: &[u8]| {
    // Each 4-byte record: code (2 bytes LE), caller byte, flags
    let Ok(tool) = SigningKey::from_slice(&[0x42; 32]) else { return };
    let mut engine = MosaicEngine::new(ADMIN, Address([0x5e; 20]), EngineConfig::default());
    if engine.set_authorized_signer(ADMIN, address_of(tool.verifying_key())).is_err() { return; }

    for rec in data.chunks_exact(4) {
        let code = u64::from(u16::from_le_bytes([rec[0], rec[1]]));
        let caller = Address([rec[2].max(1); 20]);
        let flags = rec[3];
        let _ = engine.set_paused(ADMIN, flags & 1 == 1);
        let Ok(sig) = sign_redemption(&tool, code, &caller) else { continue };
        let claimed_before = engine.total_issued();
        match engine.redeem(caller, code, &sig.to_bytes(), u128::from(flags >> 1)) {
            Ok(triple) => {
                assert_eq!(engine.total_issued(), claimed_before + 3);
                assert_eq!(engine.owner_of(triple.primary), Some(caller));
            }
            Err(MintError::SystemPaused | MintError::CodeOutOfRange(_) | MintError::AlreadyMinted(_)) => {
                assert_eq!(engine.total_issued(), claimed_before);
            }
            Err(other) => panic!("unexpected rejection: {other}"),
        }
    }
});
