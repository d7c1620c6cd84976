//! CLI handler for the `gen` command: UTF-8 test corpora.
//!
//! Generates content dominated by particular sequence lengths, plus an
//! invalid-noise pattern for exercising sanitize and the error paths.

use anyhow::{Context, Result};
use charwise::validate;
use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Generate test corpora for benchmarking and fuzzing.
#[derive(Debug, Parser)]
pub struct GenArgs {
    /// Size to generate (supports b, kb, mb - case insensitive)
    #[arg(value_parser = parse_size)]
    pub size: usize,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content pattern to generate
    #[arg(short, long, default_value = "mixed")]
    pub pattern: PatternArg,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Verify the generated output (valid patterns must validate,
    /// invalid-noise must not)
    #[arg(long)]
    pub verify: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PatternArg {
    /// Pure 7-bit ASCII prose
    Ascii,
    /// Latin Extended and Greek text (2-byte sequences)
    Latin,
    /// CJK text (3-byte sequences)
    Cjk,
    /// Emoji (4-byte sequences)
    Emoji,
    /// Realistic mix of all sequence lengths
    Mixed,
    /// Uniform random valid scalar values
    AllLengths,
    /// Valid text peppered with invalid bytes
    InvalidNoise,
}

/// Parse size strings like "1mb", "512KB", "1024" (case insensitive).
fn parse_size(s: &str) -> Result<usize, String> {
    let s = s.trim().to_lowercase();

    if let Ok(bytes) = s.parse::<usize>() {
        return Ok(bytes);
    }

    let (num_str, unit) = if s.ends_with("mb") {
        (s.trim_end_matches("mb"), 1024 * 1024)
    } else if s.ends_with("kb") {
        (s.trim_end_matches("kb"), 1024)
    } else if s.ends_with('b') {
        (s.trim_end_matches('b'), 1)
    } else {
        return Err(format!(
            "invalid size format: '{}' (use forms like '64kb', '1mb', or '4096')",
            s
        ));
    };

    num_str
        .trim()
        .parse::<usize>()
        .map(|n| n * unit)
        .map_err(|_| format!("invalid number in size: '{}'", s))
}

pub fn run(args: GenArgs) -> Result<i32> {
    let data = generate(args.size, args.pattern, args.seed);

    if args.verify {
        let valid = validate(&data);
        let expected = !matches!(args.pattern, PatternArg::InvalidNoise);
        if valid != expected {
            anyhow::bail!(
                "verification failed: expected valid={}, got valid={}",
                expected,
                valid
            );
        }
    }

    match &args.output {
        Some(path) => std::fs::write(path, &data)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            use std::io::Write;
            std::io::stdout()
                .write_all(&data)
                .context("failed to write to stdout")?;
        }
    }
    Ok(0)
}

/// Generate content of approximately `target_size` bytes.
pub fn generate(target_size: usize, pattern: PatternArg, seed: Option<u64>) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or(0));
    match pattern {
        PatternArg::Ascii => from_phrases(target_size, &mut rng, ASCII_PHRASES),
        PatternArg::Latin => from_phrases(target_size, &mut rng, LATIN_PHRASES),
        PatternArg::Cjk => from_phrases(target_size, &mut rng, CJK_PHRASES),
        PatternArg::Emoji => from_phrases(target_size, &mut rng, EMOJI_PHRASES),
        PatternArg::Mixed => {
            let all: Vec<&str> = ASCII_PHRASES
                .iter()
                .chain(LATIN_PHRASES)
                .chain(CJK_PHRASES)
                .chain(EMOJI_PHRASES)
                .copied()
                .collect();
            from_phrases(target_size, &mut rng, &all)
        }
        PatternArg::AllLengths => all_lengths(target_size, &mut rng),
        PatternArg::InvalidNoise => invalid_noise(target_size, &mut rng),
    }
}

const ASCII_PHRASES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog. ",
    "Pack my box with five dozen liquor jugs. ",
    "Sphinx of black quartz, judge my vow. ",
    "How vexingly quick daft zebras jump!\n",
];

const LATIN_PHRASES: &[&str] = &[
    "café résumé naïve über façade ",
    "jalapeño piñata señor mañana ",
    "αβγδε ζηθικ λμνξο πρστυ ",
    "привет мир добрый день\n",
];

const CJK_PHRASES: &[&str] = &[
    "日本語のテキストです。",
    "中文文本示例。",
    "한국어 텍스트입니다. ",
    "ひらがなとカタカナ\n",
];

const EMOJI_PHRASES: &[&str] = &[
    "🎉🚀💻🔥🌍",
    "😀🎯💡🌟⭐",
    "🎨🎭🎪🎢🎡\n",
];

/// Concatenate random phrases up to the target size, never splitting a
/// character.
fn from_phrases(target_size: usize, rng: &mut ChaCha8Rng, phrases: &[&str]) -> Vec<u8> {
    let mut result = Vec::with_capacity(target_size + 64);
    while result.len() < target_size {
        let phrase = phrases[rng.gen_range(0..phrases.len())].as_bytes();
        let remaining = target_size - result.len();
        if phrase.len() <= remaining {
            result.extend_from_slice(phrase);
        } else {
            // Pad with ASCII to avoid a partial sequence at the end.
            result.resize(target_size, b'.');
        }
    }
    result
}

/// Uniform random scalar values across all four sequence lengths.
fn all_lengths(target_size: usize, rng: &mut ChaCha8Rng) -> Vec<u8> {
    let mut result = Vec::with_capacity(target_size + 4);
    let mut sink = Vec::new();
    while result.len() < target_size {
        let value = loop {
            let v = rng.gen_range(0..=0x10FFFFu32);
            if let Ok(cp) = charwise::CodePoint::new(v) {
                break cp;
            }
        };
        sink.clear();
        charwise::encode_one(value, &mut sink);
        let remaining = target_size - result.len();
        if sink.len() <= remaining {
            result.extend_from_slice(&sink);
        } else {
            result.resize(target_size, b'.');
        }
    }
    result
}

/// Mostly valid text with invalid bytes sprinkled in (roughly 1 in 32).
fn invalid_noise(target_size: usize, rng: &mut ChaCha8Rng) -> Vec<u8> {
    let bad_bytes: &[u8] = &[0x80, 0xBF, 0xC0, 0xC1, 0xED, 0xF5, 0xFF];
    let mut result = from_phrases(target_size, rng, ASCII_PHRASES);
    let corruptions = (target_size / 32).max(1);
    for _ in 0..corruptions {
        if result.is_empty() {
            break;
        }
        let at = rng.gen_range(0..result.len());
        result[at] = bad_bytes[rng.gen_range(0..bad_bytes.len())];
    }
    result
}
