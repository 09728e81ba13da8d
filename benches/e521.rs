use criterion::{Criterion, criterion_group, criterion_main};
use keccak_e521::curve::e521::{Point, Scalar};
use keccak_e521::mac::kmacxof256_512;
use keccak_e521::signatures::schnorr;
use std::hint::black_box;

pub fn bench_scalar_multiplication(c: &mut Criterion) {
    let k = Scalar::from_digest(&kmacxof256_512(b"", b"bench", b"K"));

    c.bench_function("e521 k*G", |b| {
        b.iter(|| Point::generator().multiply_scalar(black_box(&k)))
    });
}

pub fn bench_sign(c: &mut Criterion) {
    c.bench_function("schnorr sign", |b| {
        b.iter(|| schnorr::sign(black_box(b"message"), b"passphrase"))
    });
}

criterion_group!(benches, bench_scalar_multiplication, bench_sign);
criterion_main!(benches);
