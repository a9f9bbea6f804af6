#![no_main]

use libfuzzer_sys::fuzz_target;
use mosaic_engine::recover_signer;

fuzz_target!(|data: &[u8]| {
    // First 32 bytes are the digest, the rest is the candidate signature
    if data.len() < 32 { return; }
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&data[..32]);
    let _ = recover_signer(&digest, &data[32..]);
});
