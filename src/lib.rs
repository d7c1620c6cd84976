//! # Charwise
//!
//! Table-driven UTF-8 validation, codec, and character traversal.
//!
//! The engine is a deterministic finite automaton over twelve byte classes
//! that recognizes exactly the RFC 3629 language (no overlong encodings, no
//! surrogates, nothing above U+10FFFF) one character at a time, in both the
//! forward and the backward direction. Everything else (validation, decode,
//! encode, repair, character stepping) is a thin layer over that automaton.
//!
//! ## Module Organization
//!
//! - [`dfa`] - Byte classes, transition tables, and the per-character walk
//!   primitives
//! - [`codepoint`] - Validated Unicode scalar values
//! - [`codec`] - Range-level operations: validate, decode, encode, sanitize
//! - [`chars`] - Checked and unchecked character stepping, plus an iterator
//! - [`error`] - The error taxonomy (leading byte, overlong, continuation,
//!   missing byte)
//!
//! ## Quick Start
//!
//! ```
//! use charwise::{chars, decode_one, sanitize_default, validate};
//!
//! // Validation rejects everything RFC 3629 rejects
//! assert!(validate("héllo 日本 🎉".as_bytes()));
//! assert!(!validate(&[0xC0, 0x80])); // overlong NUL
//! assert!(!validate(&[0xED, 0xA0, 0x80])); // surrogate
//!
//! // Single-character decode
//! let pound = decode_one(&[0xC2, 0xA3]).unwrap();
//! assert_eq!(pound.value(), 0xA3);
//!
//! // Lossy repair: one U+FFFD per maximal invalid subsequence
//! let mut out = Vec::new();
//! sanitize_default(&[0x41, 0xFF, 0x42], &mut out);
//! assert_eq!(out, b"A\xEF\xBF\xBDB");
//!
//! // Character iteration
//! let count = chars("héllo".as_bytes()).count();
//! assert_eq!(count, 5);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Standard library support
//! - `serde` - Serialization of error and code point types
//! - `cli` - The `charwise` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

// =============================================================================
// Core modules
// =============================================================================

/// The UTF-8 recognizer: byte classes, transition tables, walk primitives.
pub mod dfa;

/// Validated Unicode scalar values.
pub mod codepoint;

/// Error kinds and positioned decode errors.
pub mod error;

// =============================================================================
// Application modules
// =============================================================================

/// Range-level codec operations.
pub mod codec;

/// Character-level traversal.
pub mod chars;

// =============================================================================
// Public re-exports (convenience)
// =============================================================================

pub use chars::{chars, Chars};
pub use codec::{
    char_length, char_length_unchecked, check, decode, decode_one, encode, encode_one,
    find_invalid, find_leading_byte, sanitize, sanitize_default, validate,
};
pub use codepoint::{CodePoint, CodePointError};
pub use error::{DecodeError, ErrorKind};
