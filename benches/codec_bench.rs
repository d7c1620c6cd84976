//! Benchmarks for decode, sanitize, and character stepping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use charwise::{chars, decode, sanitize_default, CodePoint};

const SIZES: [usize; 3] = [16 * 1024, 256 * 1024, 1024 * 1024];

fn repeat_to(size: usize, pattern: &str) -> Vec<u8> {
    let bytes = pattern.as_bytes();
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        if remaining >= bytes.len() {
            result.extend_from_slice(bytes);
        } else {
            result.resize(size, b'A');
        }
    }
    result
}

fn generate_mixed(size: usize) -> Vec<u8> {
    repeat_to(
        size,
        "Hello, world! Café résumé. 日本語 中文 한국어. Emoji: 🎉🚀💻.\n",
    )
}

/// Mixed text with roughly 3% of bytes replaced by invalid ones.
fn generate_noisy(size: usize) -> Vec<u8> {
    let mut data = generate_mixed(size);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let bad = [0x80u8, 0xC0, 0xF5, 0xFF];
    for _ in 0..size / 32 {
        let at = rng.gen_range(0..data.len());
        data[at] = bad[rng.gen_range(0..bad.len())];
    }
    data
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{}mb", bytes / (1024 * 1024))
    } else {
        format!("{}kb", bytes / 1024)
    }
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_mixed");
    for size in SIZES {
        let data = generate_mixed(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format_size(size)),
            &data,
            |b, data| {
                let mut sink: Vec<CodePoint> = Vec::with_capacity(data.len());
                b.iter(|| {
                    sink.clear();
                    decode(black_box(data), &mut sink)
                });
            },
        );
    }
    group.finish();
}

fn bench_sanitize_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_clean");
    for size in SIZES {
        let data = generate_mixed(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format_size(size)),
            &data,
            |b, data| {
                let mut sink = Vec::with_capacity(data.len() + 16);
                b.iter(|| {
                    sink.clear();
                    sanitize_default(black_box(data), &mut sink);
                });
            },
        );
    }
    group.finish();
}

fn bench_sanitize_noisy(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_noisy");
    for size in SIZES {
        let data = generate_noisy(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format_size(size)),
            &data,
            |b, data| {
                let mut sink = Vec::with_capacity(data.len() + 16);
                b.iter(|| {
                    sink.clear();
                    sanitize_default(black_box(data), &mut sink);
                });
            },
        );
    }
    group.finish();
}

fn bench_chars_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("chars_forward");
    for size in SIZES {
        let data = generate_mixed(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format_size(size)),
            &data,
            |b, data| {
                b.iter(|| chars(black_box(data)).count());
            },
        );
    }
    group.finish();
}

fn bench_chars_backward(c: &mut Criterion) {
    let mut group = c.benchmark_group("chars_backward");
    for size in SIZES {
        let data = generate_mixed(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format_size(size)),
            &data,
            |b, data| {
                b.iter(|| chars(black_box(data)).rev().count());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_decode,
    bench_sanitize_clean,
    bench_sanitize_noisy,
    bench_chars_forward,
    bench_chars_backward,
);

criterion_main!(benches);
