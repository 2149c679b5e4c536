//! Encode/decode throughput on a realistic mixed-casing paragraph.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use casemark_core::{decode, encode};

const PARAGRAPH: &str = "The Quick BROWN Fox jumps over the LAZY dog. \
McDonald opened a NEW restaurant in the U.S.A, pricing burgers at 3.14 each. \
I said WOW, didn't I? École students AGREED.";

fn corpus() -> String {
    // ~64 KiB of input so per-call overhead stops dominating.
    let mut text = String::new();
    while text.len() < 64 * 1024 {
        text.push_str(PARAGRAPH);
        text.push(' ');
    }
    text
}

fn bench_encode(c: &mut Criterion) {
    let text = corpus();
    c.bench_function("encode_64k", |b| b.iter(|| encode(black_box(&text))));
}

fn bench_decode(c: &mut Criterion) {
    let marked = encode(&corpus());
    c.bench_function("decode_64k", |b| b.iter(|| decode(black_box(&marked))));
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
