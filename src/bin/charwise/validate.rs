//! CLI handler for the `validate` command.

use anyhow::{Context, Result};
use charwise::{check, DecodeError};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Validate input for UTF-8 compliance.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Input files to validate (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Quiet mode: exit code only, no output
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit a machine-readable JSON report to stdout
    #[arg(long)]
    pub report_json: bool,

    /// Force color output even when not a TTY
    #[arg(short = 'C', long = "color")]
    pub color: bool,

    /// Disable color output
    #[arg(short = 'M', long = "no-color")]
    pub no_color: bool,
}

/// Exit codes for the validate command.
pub mod exit_codes {
    /// UTF-8 is valid.
    pub const SUCCESS: i32 = 0;
    /// UTF-8 is invalid (validation error).
    pub const INVALID: i32 = 1;
    /// I/O error (file not found, permission denied, etc.).
    pub const IO_ERROR: i32 = 2;
}

/// ANSI color codes for error output.
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LOCATION: &str = "\x1b[1;34m"; // Bold blue
    pub const LINE_NUM: &str = "\x1b[0;34m"; // Blue
    pub const CARET: &str = "\x1b[1;32m"; // Bold green
}

/// Color scheme that can be disabled.
struct ColorScheme {
    error: &'static str,
    location: &'static str,
    line_num: &'static str,
    caret: &'static str,
    reset: &'static str,
}

impl ColorScheme {
    fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                error: colors::ERROR,
                location: colors::LOCATION,
                line_num: colors::LINE_NUM,
                caret: colors::CARET,
                reset: colors::RESET,
            }
        } else {
            Self {
                error: "",
                location: "",
                line_num: "",
                caret: "",
                reset: "",
            }
        }
    }
}

/// One entry of the machine-readable report.
#[derive(Debug, Serialize)]
struct Report {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Run the validate command.
pub fn run(args: ValidateArgs) -> Result<i32> {
    let use_color = if args.no_color {
        false
    } else if args.color {
        true
    } else {
        atty::is(atty::Stream::Stderr)
    };
    let scheme = ColorScheme::new(use_color);

    let mut reports = Vec::new();

    let code = if args.files.is_empty() {
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read from stdin")?;
        validate_input(&input, "<stdin>", &args, &scheme, &mut reports)
    } else {
        let mut any_invalid = false;
        let mut any_io_error = false;

        for path in &args.files {
            match fs::read(path) {
                Ok(input) => {
                    let filename = path.to_string_lossy();
                    let result = validate_input(&input, &filename, &args, &scheme, &mut reports);
                    if result == exit_codes::INVALID {
                        any_invalid = true;
                    }
                }
                Err(e) => {
                    any_io_error = true;
                    if !args.quiet {
                        eprintln!(
                            "{}error{}: {}: {}",
                            scheme.error,
                            scheme.reset,
                            path.display(),
                            e
                        );
                    }
                }
            }
        }

        if any_io_error {
            exit_codes::IO_ERROR
        } else if any_invalid {
            exit_codes::INVALID
        } else {
            exit_codes::SUCCESS
        }
    };

    if args.report_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(code)
}

/// Validate a single input, printing and recording errors.
fn validate_input(
    input: &[u8],
    filename: &str,
    args: &ValidateArgs,
    scheme: &ColorScheme,
    reports: &mut Vec<Report>,
) -> i32 {
    match check(input) {
        Ok(()) => {
            reports.push(Report {
                file: filename.to_owned(),
                valid: true,
                offset: None,
                line: None,
                column: None,
                message: None,
            });
            exit_codes::SUCCESS
        }
        Err(err) => {
            let (line, column) = line_column(input, err.offset);
            if !args.quiet && !args.report_json {
                print_error(&err, input, filename, line, column, scheme);
            }
            reports.push(Report {
                file: filename.to_owned(),
                valid: false,
                offset: Some(err.offset),
                line: Some(line),
                column: Some(column),
                message: Some(err.kind.message().to_owned()),
            });
            exit_codes::INVALID
        }
    }
}

/// Line (1-indexed) and byte column (1-indexed) of a byte offset.
fn line_column(input: &[u8], offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut line_start = 0;
    for (i, &b) in input[..offset.min(input.len())].iter().enumerate() {
        if b == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    (line, offset - line_start + 1)
}

/// Print a formatted error message with a context snippet.
fn print_error(
    err: &DecodeError,
    input: &[u8],
    filename: &str,
    line: usize,
    column: usize,
    scheme: &ColorScheme,
) {
    let byte_info = if err.offset < input.len() {
        format!(" (byte 0x{:02X})", input[err.offset])
    } else {
        String::new()
    };
    eprintln!(
        "{}error{}: {}{}",
        scheme.error,
        scheme.reset,
        err.kind.message(),
        byte_info
    );
    eprintln!(
        "  {}--> {}:{}:{}{}",
        scheme.location, filename, line, column, scheme.reset
    );

    if let Some((content, caret_offset)) = error_line(input, err.offset) {
        let width = line.to_string().len().max(3);
        let blank = " ".repeat(width + 2);
        eprintln!("{}{}|{}", blank, scheme.line_num, scheme.reset);
        eprintln!(
            " {}{:>width$}{} {}|{} {}",
            scheme.line_num,
            line,
            scheme.reset,
            scheme.line_num,
            scheme.reset,
            content,
            width = width
        );
        eprintln!(
            "{}{}|{} {}{}^{}",
            blank,
            scheme.line_num,
            scheme.reset,
            " ".repeat(caret_offset),
            scheme.caret,
            scheme.reset
        );
    }
    eprintln!();
}

/// The (lossily decoded) line containing `offset`, and the caret position
/// within it.
fn error_line(input: &[u8], offset: usize) -> Option<(String, usize)> {
    let start = input[..offset.min(input.len())]
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let end = input[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| start + i)
        .unwrap_or(input.len());

    let mut content = String::new();
    let mut caret = 0;
    for (i, &b) in input[start..end].iter().enumerate() {
        if start + i == offset {
            caret = content.len();
        }
        if b.is_ascii_graphic() || b == b' ' || b == b'\t' {
            content.push(b as char);
        } else {
            content.push_str(&format!("\\x{:02X}", b));
        }
    }
    if start + input[start..end].len() <= offset {
        caret = content.len();
    }

    // Truncate very long lines around the caret
    const MAX_WIDTH: usize = 80;
    if content.len() > MAX_WIDTH {
        let from = caret.saturating_sub(MAX_WIDTH / 2);
        let to = (from + MAX_WIDTH).min(content.len());
        let mut truncated = String::new();
        if from > 0 {
            truncated.push_str("...");
        }
        truncated.push_str(&content[from..to]);
        if to < content.len() {
            truncated.push_str("...");
        }
        let caret = caret - from + if from > 0 { 3 } else { 0 };
        return Some((truncated, caret));
    }

    Some((content, caret))
}
