use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wtf8_codec::{convert_size, convert_to_narrow, convert_to_wide, is_utf8, is_wtf8, to_utf16, to_wtf8};

const LIPSUM: &str = include_str!("../tests/data/lipsum.txt");

pub fn criterion_benchmark(c: &mut Criterion) {
    let bytes = LIPSUM.as_bytes();
    let units: Vec<u16> = LIPSUM.encode_utf16().collect();

    let mut group = c.benchmark_group("validate");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("utf8", |b| b.iter(|| is_utf8(black_box(bytes))));
    group.bench_function("wtf8", |b| b.iter(|| is_wtf8(black_box(bytes))));
    group.bench_function("core_str", |b| {
        b.iter(|| core::str::from_utf8(black_box(bytes)).is_ok())
    });
    group.finish();

    let mut group = c.benchmark_group("widen");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("owned", |b| b.iter(|| to_utf16(black_box(bytes)).unwrap()));
    group.bench_function("buffer", |b| {
        let mut dst = vec![0u16; convert_size(bytes)];
        b.iter(|| convert_to_wide(&mut dst, black_box(bytes)).unwrap())
    });
    group.finish();

    let mut group = c.benchmark_group("narrow");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("owned", |b| b.iter(|| to_wtf8(black_box(&units))));
    group.bench_function("buffer", |b| {
        let mut dst = vec![0u8; convert_size(units.as_slice())];
        b.iter(|| convert_to_narrow(&mut dst, black_box(&units)))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
