//! Validated Unicode scalar values.
//!
//! A [`CodePoint`] wraps a `u32` that is at most U+10FFFF and never in the
//! UTF-16 surrogate range U+D800..=U+DFFF. Both invariants are established at
//! construction, so downstream code (the encoder in particular) never
//! re-checks them. The invariants coincide exactly with Rust's `char`, which
//! makes the conversions in both directions total.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Why a `u32` failed to convert into a [`CodePoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePointError {
    /// Above U+10FFFF.
    OutOfRange,
    /// In the UTF-16 surrogate range U+D800..=U+DFFF.
    Surrogate,
}

impl fmt::Display for CodePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodePointError::OutOfRange => f.write_str("code point above U+10FFFF"),
            CodePointError::Surrogate => f.write_str("surrogate code point"),
        }
    }
}

/// A Unicode scalar value.
///
/// Ordering and equality are the natural integer ones.
///
/// # Examples
///
/// ```
/// use charwise::CodePoint;
///
/// let cp = CodePoint::new(0x1F389).unwrap();
/// assert_eq!(cp.value(), 0x1F389);
/// assert_eq!(cp.to_string(), "U+1F389");
///
/// assert!(CodePoint::new(0xD800).is_err()); // surrogate
/// assert!(CodePoint::new(0x110000).is_err()); // out of range
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CodePoint(u32);

impl CodePoint {
    /// U+FFFD REPLACEMENT CHARACTER.
    pub const REPLACEMENT: CodePoint = CodePoint(0xFFFD);

    /// The largest scalar value, U+10FFFF.
    pub const MAX: CodePoint = CodePoint(0x10FFFF);

    /// Validated conversion from a raw integer.
    #[inline]
    pub fn new(value: u32) -> Result<CodePoint, CodePointError> {
        if value > 0x10FFFF {
            Err(CodePointError::OutOfRange)
        } else if (0xD800..=0xDFFF).contains(&value) {
            Err(CodePointError::Surrogate)
        } else {
            Ok(CodePoint(value))
        }
    }

    /// Infallible conversion: substitutes `fallback` when `value` is not a
    /// scalar value.
    #[inline]
    pub fn new_or(value: u32, fallback: CodePoint) -> CodePoint {
        CodePoint::new(value).unwrap_or(fallback)
    }

    /// Wrap a value without validating it.
    ///
    /// # Safety
    ///
    /// `value` must be at most 0x10FFFF and outside 0xD800..=0xDFFF. The
    /// decoder uses this after the automaton has accepted, where both hold
    /// by construction of the transition tables.
    #[inline]
    pub const unsafe fn new_unchecked(value: u32) -> CodePoint {
        CodePoint(value)
    }

    /// The raw scalar value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Bytes needed to encode this value in UTF-8 (1..=4).
    #[inline]
    pub fn len_utf8(self) -> usize {
        match self.0 {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        }
    }

    /// True for values below 0x80.
    #[inline]
    pub fn is_ascii(self) -> bool {
        self.0 < 0x80
    }
}

impl From<char> for CodePoint {
    #[inline]
    fn from(c: char) -> CodePoint {
        CodePoint(c as u32)
    }
}

impl From<CodePoint> for char {
    #[inline]
    fn from(cp: CodePoint) -> char {
        // SAFETY: the CodePoint invariants are exactly the char invariants.
        unsafe { char::from_u32_unchecked(cp.0) }
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = CodePointError;

    #[inline]
    fn try_from(value: u32) -> Result<CodePoint, CodePointError> {
        CodePoint::new(value)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}
