//! Charwise CLI for validating, transcoding, and repairing UTF-8 data.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod generators;
mod transcode;
mod validate;

#[derive(Debug, Parser)]
#[command(name = "charwise")]
#[command(about = "UTF-8 validation and repair toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate input for UTF-8 compliance
    Validate(validate::ValidateArgs),
    /// Count the characters in the input
    Length(transcode::LengthArgs),
    /// Decode UTF-8 input to one code point per line
    Decode(transcode::DecodeArgs),
    /// Encode code points (U+XXXX, hex, or decimal) to UTF-8 bytes
    Encode(transcode::EncodeArgs),
    /// Replace invalid subsequences with a replacement character
    Sanitize(transcode::SanitizeArgs),
    /// Print the byte offset of the first invalid character
    FindInvalid(transcode::FindInvalidArgs),
    /// Print the next offset that can begin a character
    FindLead(transcode::FindLeadArgs),
    /// Generate test corpora for benchmarking and fuzzing
    Gen(generators::GenArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Validate(args) => validate::run(args)?,
        Command::Length(args) => transcode::run_length(args)?,
        Command::Decode(args) => transcode::run_decode(args)?,
        Command::Encode(args) => transcode::run_encode(args)?,
        Command::Sanitize(args) => transcode::run_sanitize(args)?,
        Command::FindInvalid(args) => transcode::run_find_invalid(args)?,
        Command::FindLead(args) => transcode::run_find_lead(args)?,
        Command::Gen(args) => generators::run(args)?,
    };

    std::process::exit(code);
}
