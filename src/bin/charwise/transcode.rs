//! CLI handlers for the length, decode, encode, sanitize, find-invalid, and
//! find-lead commands.

use anyhow::{bail, Context, Result};
use charwise::{
    char_length, chars, find_invalid, find_leading_byte, sanitize, CodePoint,
};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Read a file, or stdin when no path is given.
fn read_input(path: &Option<PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p).with_context(|| format!("failed to read {}", p.display())),
        None => {
            let mut input = Vec::new();
            io::stdin()
                .read_to_end(&mut input)
                .context("failed to read from stdin")?;
            Ok(input)
        }
    }
}

/// Write to a file, or stdout when no path is given.
fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(p) => fs::write(p, data).with_context(|| format!("failed to write {}", p.display())),
        None => {
            io::stdout()
                .write_all(data)
                .context("failed to write to stdout")?;
            Ok(())
        }
    }
}

/// Parse a code point written as `U+XXXX`, `0xXXXX`, or decimal.
fn parse_code_point(s: &str) -> Result<CodePoint> {
    let s = s.trim();
    let value = if let Some(hex) = s.strip_prefix("U+").or_else(|| s.strip_prefix("u+")) {
        u32::from_str_radix(hex, 16).with_context(|| format!("invalid code point '{}'", s))?
    } else if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).with_context(|| format!("invalid code point '{}'", s))?
    } else {
        s.parse::<u32>()
            .with_context(|| format!("invalid code point '{}'", s))?
    };
    CodePoint::new(value).map_err(|e| anyhow::anyhow!("{}: {}", s, e))
}

/// Count the characters in the input.
#[derive(Debug, Parser)]
pub struct LengthArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

pub fn run_length(args: LengthArgs) -> Result<i32> {
    let input = read_input(&args.file)?;
    match char_length(&input) {
        Ok(count) => {
            println!("{}", count);
            Ok(0)
        }
        Err(err) => {
            eprintln!("error: {}", err);
            Ok(1)
        }
    }
}

/// Decode UTF-8 input to one code point per line.
#[derive(Debug, Parser)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

pub fn run_decode(args: DecodeArgs) -> Result<i32> {
    let input = read_input(&args.file)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for result in chars(&input) {
        match result {
            Ok(cp) => writeln!(out, "{}", cp)?,
            Err(err) => {
                eprintln!("error: {}", err);
                return Ok(1);
            }
        }
    }
    Ok(0)
}

/// Encode code points to UTF-8 bytes.
#[derive(Debug, Parser)]
pub struct EncodeArgs {
    /// Code points as U+XXXX, 0xXXXX, or decimal (reads whitespace-separated
    /// values from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub code_points: Vec<String>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run_encode(args: EncodeArgs) -> Result<i32> {
    let tokens: Vec<String> = if args.code_points.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read from stdin")?;
        text.split_whitespace().map(str::to_owned).collect()
    } else {
        args.code_points
    };

    if tokens.is_empty() {
        bail!("no code points to encode");
    }

    let mut sink = Vec::new();
    for token in &tokens {
        let cp = parse_code_point(token)?;
        charwise::encode_one(cp, &mut sink);
    }
    write_output(&args.output, &sink)?;
    Ok(0)
}

/// Replace invalid subsequences with a replacement character.
#[derive(Debug, Parser)]
pub struct SanitizeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replacement code point (default U+FFFD)
    #[arg(short, long, default_value = "U+FFFD", value_parser = parse_code_point_arg)]
    pub replacement: CodePoint,
}

fn parse_code_point_arg(s: &str) -> Result<CodePoint, String> {
    parse_code_point(s).map_err(|e| e.to_string())
}

pub fn run_sanitize(args: SanitizeArgs) -> Result<i32> {
    let input = read_input(&args.file)?;
    let mut sink = Vec::with_capacity(input.len());
    sanitize(&input, &mut sink, args.replacement);
    write_output(&args.output, &sink)?;
    Ok(0)
}

/// Print the byte offset of the first invalid character.
#[derive(Debug, Parser)]
pub struct FindInvalidArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

pub fn run_find_invalid(args: FindInvalidArgs) -> Result<i32> {
    let input = read_input(&args.file)?;
    let at = find_invalid(&input);
    if at == input.len() {
        println!("valid");
        Ok(0)
    } else {
        println!("{}", at);
        Ok(1)
    }
}

/// Print the next offset that can begin a character.
#[derive(Debug, Parser)]
pub struct FindLeadArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Offset to start scanning from
    #[arg(long, default_value = "0")]
    pub from: usize,
}

pub fn run_find_lead(args: FindLeadArgs) -> Result<i32> {
    let input = read_input(&args.file)?;
    if args.from > input.len() {
        bail!(
            "offset {} is beyond the input length {}",
            args.from,
            input.len()
        );
    }
    let at = find_leading_byte(&input, args.from);
    if at == input.len() {
        println!("none");
        Ok(1)
    } else {
        println!("{}", at);
        Ok(0)
    }
}
