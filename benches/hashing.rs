use criterion::{black_box, criterion_group, criterion_main, Criterion};

use alfa_passhash::{compare_password, decode, encode, HashParams};

const BENCH: HashParams = HashParams::new(4096, 1, 1, 16, 32);

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_4mib", |b| {
        b.iter(|| encode(black_box(b"correct horse battery"), &BENCH).unwrap())
    });
}

fn bench_verify(c: &mut Criterion) {
    let stored = encode(b"correct horse battery", &BENCH).unwrap();
    c.bench_function("verify_4mib", |b| {
        b.iter(|| compare_password(black_box(b"correct horse battery"), &stored).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let stored = encode(b"correct horse battery", &BENCH).unwrap();
    c.bench_function("decode", |b| b.iter(|| decode(black_box(&stored)).unwrap()));
}

criterion_group!(benches, bench_encode, bench_verify, bench_decode);
criterion_main!(benches);
