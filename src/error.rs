//! Decode errors.
//!
//! Every RFC 3629 violation maps to exactly one [`ErrorKind`] at the byte
//! where the recognizer left its accepting path. Collapsing these into a
//! single "invalid UTF-8" would lose the diagnostic value of telling an
//! overlong encoding from a truncated sequence, so the taxonomy is kept
//! minimal but not unary.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The way a byte sequence violated the UTF-8 grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ErrorKind {
    /// A byte that should begin a character did not (a stray continuation
    /// byte, or a byte that is invalid everywhere such as 0xFF).
    LeadingByte,

    /// A well-shaped sequence encoding a value that fits a shorter one.
    /// Rejected to prevent canonicalization attacks.
    OverlongEncoded,

    /// Something other than a continuation byte appeared in continuation
    /// position. Also covers surrogate and above-U+10FFFF second bytes,
    /// which the automaton rejects at that position.
    ContinuationByte,

    /// Input ended in the middle of a character.
    MissingByte,

    /// A single-character decode was handed more than one character.
    TrailingBytes,
}

impl ErrorKind {
    /// Stable human-readable message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::LeadingByte => "expected a leading byte",
            ErrorKind::OverlongEncoded => "detected overlong encoding",
            ErrorKind::ContinuationByte => "expected a continuation byte",
            ErrorKind::MissingByte => "expected more bytes",
            ErrorKind::TrailingBytes => "input contained bytes beyond one character",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The first violation found in an input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DecodeError {
    /// The kind of violation.
    pub kind: ErrorKind,
    /// Byte offset at which it was detected (0-indexed).
    pub offset: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}
