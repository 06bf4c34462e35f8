//! Performance benchmarks for the LZ77 codec.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use bytepress_lz77::{compress, decompress};

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// Uniform data - one long self-overlapping run (best case)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no matches, every token a literal (worst case)
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - word-scale repeats inside the window
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk]);
        }
        data
    }
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_compress");
    group.sample_size(10);

    let patterns: [(&str, PatternGenerator); 3] = [
        ("uniform", test_data::uniform as PatternGenerator),
        ("random", test_data::random as PatternGenerator),
        ("text", test_data::text_like as PatternGenerator),
    ];

    let size = 16 * 1024;
    for (name, generator) in patterns {
        let data = generator(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let compressed = compress(black_box(data)).unwrap();
                black_box(compressed);
            });
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_decompress");

    let patterns: [(&str, PatternGenerator); 3] = [
        ("uniform", test_data::uniform as PatternGenerator),
        ("random", test_data::random as PatternGenerator),
        ("text", test_data::text_like as PatternGenerator),
    ];

    let size = 16 * 1024;
    for (name, generator) in patterns {
        let original = generator(size);
        let compressed = compress(&original).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &compressed, |b, data| {
            b.iter(|| {
                let decompressed = decompress(black_box(data)).unwrap();
                black_box(decompressed);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
