use criterion::{Criterion, criterion_group, criterion_main};
use keccak_e521::mac::{kmacxof256, labels};
use std::hint::black_box;

pub fn bench_kmacxof256(c: &mut Criterion) {
    let key = [0x40u8; 32];
    let short = [0u8; 64];
    let long = vec![0u8; 64 * 1024];

    c.bench_function("kmacxof256 64 bytes", |b| {
        b.iter(|| kmacxof256(black_box(&key), black_box(&short), 512, labels::TAG))
    });

    c.bench_function("kmacxof256 64 KiB", |b| {
        b.iter(|| kmacxof256(black_box(&key), black_box(&long), 512, labels::TAG))
    });
}

criterion_group!(benches, bench_kmacxof256);
criterion_main!(benches);
