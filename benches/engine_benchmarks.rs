use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use k256::ecdsa::SigningKey;
use mosaic_engine::{
    address_of, recover_signer, redemption_digest, sign_redemption, Address, EngineConfig, MosaicEngine,
};

fn tool() -> SigningKey {
    SigningKey::from_slice(&[0x42; 32]).unwrap()
}

fn bench_redemption_digest(c: &mut Criterion) {
    let requester = Address([0x11; 20]);
    c.bench_function("redemption_digest", |b| {
        b.iter(|| redemption_digest(black_box(999), black_box(&requester)));
    });
}

fn bench_recover_signer(c: &mut Criterion) {
    let requester = Address([0x11; 20]);
    let digest = redemption_digest(1, &requester);
    let sig = sign_redemption(&tool(), 1, &requester).unwrap().to_bytes();
    c.bench_function("recover_signer", |b| {
        b.iter(|| {
            let _ = recover_signer(black_box(&digest), black_box(&sig));
        });
    });
}

fn bench_redeem(c: &mut Criterion) {
    let tool = tool();
    let admin = Address([0xad; 20]);
    let caller = Address([0x11; 20]);
    let sig = sign_redemption(&tool, 1, &caller).unwrap().to_bytes();

    c.bench_function("redeem", |b| {
        b.iter_batched(
            || {
                let mut e = MosaicEngine::new(admin, Address([0x5e; 20]), EngineConfig::default());
                e.set_authorized_signer(admin, address_of(tool.verifying_key())).unwrap();
                e.set_paused(admin, false).unwrap();
                e
            },
            |mut e| {
                let _ = e.redeem(black_box(caller), black_box(1), black_box(&sig), 0);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_redemption_digest, bench_recover_signer, bench_redeem);
criterion_main!(benches);
