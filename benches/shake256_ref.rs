use criterion::{Criterion, criterion_group, criterion_main};
use keccak_e521::hash::shake256;
use sha3::Shake256;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use std::hint::black_box;

pub fn bench_shake256(c: &mut Criterion) {
    let data = [0u8; 1024];

    c.bench_function("shake256 1 KiB", |b| {
        b.iter(|| shake256(black_box(&data), 512))
    });
}

pub fn bench_sha3_crate(c: &mut Criterion) {
    let data = [0u8; 1024];

    c.bench_function("sha3::Shake256 1 KiB", |b| {
        b.iter(|| {
            let mut hasher = Shake256::default();
            hasher.update(black_box(&data));

            let mut out = [0u8; 64];
            hasher.finalize_xof().read(&mut out);
            out
        })
    });
}

criterion_group!(benches, bench_shake256, bench_sha3_crate);
criterion_main!(benches);
