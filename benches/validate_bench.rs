//! Benchmarks for UTF-8 validation.
//!
//! Measures validation throughput across content types that stress
//! different automaton paths: pure ASCII (the fast path), 2-byte, 3-byte
//! (CJK), and 4-byte (emoji) sequences, a realistic mix, and an input whose
//! only error sits at the very end (worst case for early exit).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use charwise::validate;

const SIZES: [usize; 4] = [1024, 16 * 1024, 256 * 1024, 1024 * 1024];

/// Repeat a pattern up to `size` bytes, padding with ASCII so no character
/// is split.
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

fn generate_ascii(size: usize) -> Vec<u8> {
    repeat_to(
        size,
        "The quick brown fox jumps over the lazy dog. 0123456789!\n",
    )
}

fn generate_2byte(size: usize) -> Vec<u8> {
    repeat_to(size, "éèêëàâäùûüôöîïçñ αβγδεζηθικ АБВГДЕЖЗИЙ")
}

fn generate_cjk(size: usize) -> Vec<u8> {
    repeat_to(size, "日本語中文韓國語漢字假名平仮名片仮名한글")
}

fn generate_emoji(size: usize) -> Vec<u8> {
    repeat_to(size, "🎉🚀💻🔥🌍😀🎯💡🌟⭐")
}

fn generate_mixed(size: usize) -> Vec<u8> {
    repeat_to(
        size,
        "Hello, world! Café résumé. 日本語 中文 한국어. Emoji: 🎉🚀💻.\n",
    )
}

/// ASCII with a single invalid byte at the end: forces a full scan.
fn generate_error_at_end(size: usize) -> Vec<u8> {
    let mut data = generate_ascii(size);
    if let Some(last) = data.last_mut() {
        *last = 0x80;
    }
    data
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{}mb", bytes / (1024 * 1024))
    } else if bytes >= 1024 {
        format!("{}kb", bytes / 1024)
    } else {
        format!("{}b", bytes)
    }
}

fn bench_group(c: &mut Criterion, name: &str, generate: fn(usize) -> Vec<u8>) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        let data = generate(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format_size(size)),
            &data,
            |b, data| {
                b.iter(|| validate(black_box(data)));
            },
        );
    }
    group.finish();
}

fn bench_ascii(c: &mut Criterion) {
    bench_group(c, "validate_ascii", generate_ascii);
}

fn bench_2byte(c: &mut Criterion) {
    bench_group(c, "validate_2byte", generate_2byte);
}

fn bench_cjk(c: &mut Criterion) {
    bench_group(c, "validate_cjk", generate_cjk);
}

fn bench_emoji(c: &mut Criterion) {
    bench_group(c, "validate_emoji", generate_emoji);
}

fn bench_mixed(c: &mut Criterion) {
    bench_group(c, "validate_mixed", generate_mixed);
}

fn bench_error_at_end(c: &mut Criterion) {
    bench_group(c, "validate_error_at_end", generate_error_at_end);
}

criterion_group!(
    benches,
    bench_ascii,
    bench_2byte,
    bench_cjk,
    bench_emoji,
    bench_mixed,
    bench_error_at_end,
);

criterion_main!(benches);
