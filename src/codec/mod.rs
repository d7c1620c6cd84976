//! Range-level codec operations.
//!
//! Everything here is a thin loop over the per-character walk primitives in
//! [`crate::dfa`]. Operations take a forward byte range and report the first
//! problem as a [`DecodeError`] carrying the kind and the byte offset where
//! it was detected, so callers can diagnose precisely or resynchronize with
//! [`find_leading_byte`].

use alloc::vec::Vec;

use crate::codepoint::CodePoint;
use crate::dfa::{self, State};
use crate::error::{DecodeError, ErrorKind};

mod sanitize;

pub use sanitize::{sanitize, sanitize_default};

/// Error for a forward walk that ended in `state` with the cursor at `pos`.
///
/// Transition errors leave the cursor just past the offending byte; running
/// out of input is reported at the end itself.
#[inline]
fn error_at(state: State, pos: usize) -> DecodeError {
    let offset = if state == State::ErrMissing {
        pos
    } else {
        pos - 1
    };
    DecodeError::new(dfa::ending_state_to_error(state), offset)
}

/// Encode one scalar value, appending 1-4 bytes to `sink`.
///
/// Cannot fail: the input is already a validated code point.
#[inline]
pub fn encode_one(cp: CodePoint, sink: &mut Vec<u8>) {
    let mut buf = [0u8; 4];
    let len = encode_one_into(cp, &mut buf);
    sink.extend_from_slice(&buf[..len]);
}

/// Encode one scalar value into a fixed buffer, returning the byte count.
#[inline]
pub fn encode_one_into(cp: CodePoint, buf: &mut [u8; 4]) -> usize {
    let v = cp.value();
    if v < 0x80 {
        buf[0] = v as u8;
        1
    } else if v < 0x800 {
        buf[0] = 0xC0 | (v >> 6) as u8;
        buf[1] = 0x80 | (v & 0x3F) as u8;
        2
    } else if v < 0x10000 {
        buf[0] = 0xE0 | (v >> 12) as u8;
        buf[1] = 0x80 | ((v >> 6) & 0x3F) as u8;
        buf[2] = 0x80 | (v & 0x3F) as u8;
        3
    } else {
        buf[0] = 0xF0 | (v >> 18) as u8;
        buf[1] = 0x80 | ((v >> 12) & 0x3F) as u8;
        buf[2] = 0x80 | ((v >> 6) & 0x3F) as u8;
        buf[3] = 0x80 | (v & 0x3F) as u8;
        4
    }
}

/// Encode a sequence of scalar values.
pub fn encode(cps: &[CodePoint], sink: &mut Vec<u8>) {
    for &cp in cps {
        encode_one(cp, sink);
    }
}

/// Decode exactly one character.
///
/// Fails with [`ErrorKind::TrailingBytes`] if input remains after a
/// successful decode, and with [`ErrorKind::MissingByte`] on empty input.
///
/// # Examples
///
/// ```
/// use charwise::{decode_one, ErrorKind};
///
/// assert_eq!(decode_one(&[0xC2, 0xA3]).unwrap().value(), 0xA3);
/// assert_eq!(
///     decode_one(&[0xC2, 0xA3, 0x41]).unwrap_err().kind,
///     ErrorKind::TrailingBytes
/// );
/// ```
pub fn decode_one(input: &[u8]) -> Result<CodePoint, DecodeError> {
    if input.is_empty() {
        return Err(DecodeError::new(ErrorKind::MissingByte, 0));
    }
    let mut pos = 0;
    let (state, bits) = dfa::decode_forward_once(input, &mut pos);
    if state != State::Accept {
        return Err(error_at(state, pos));
    }
    if pos != input.len() {
        return Err(DecodeError::new(ErrorKind::TrailingBytes, pos));
    }
    // SAFETY: the automaton accepts only scalar values.
    Ok(unsafe { CodePoint::new_unchecked(bits) })
}

/// Decode characters into `sink` until the input ends or a character fails.
///
/// Returns the cursor after the last accepted character: `input.len()` on
/// clean completion, otherwise the start of the offending character. The
/// caller distinguishes the two by comparing against the input length.
pub fn decode(input: &[u8], sink: &mut Vec<CodePoint>) -> usize {
    let mut pos = 0;
    while pos < input.len() {
        let start = pos;
        let (state, bits) = dfa::decode_forward_once(input, &mut pos);
        if state != State::Accept {
            return start;
        }
        // SAFETY: the automaton accepts only scalar values.
        sink.push(unsafe { CodePoint::new_unchecked(bits) });
    }
    pos
}

/// True iff `input` is well-formed UTF-8.
///
/// # Examples
///
/// ```
/// use charwise::validate;
///
/// assert!(validate("日本語".as_bytes()));
/// assert!(!validate(&[0xF0, 0x82, 0x82, 0xAC])); // overlong euro sign
/// ```
#[inline]
pub fn validate(input: &[u8]) -> bool {
    find_invalid(input) == input.len()
}

/// Index of the first byte of the first invalid character, or `input.len()`.
///
/// The prefix up to the returned index is always valid UTF-8.
pub fn find_invalid(input: &[u8]) -> usize {
    let mut pos = 0;
    while pos < input.len() {
        let start = pos;
        if dfa::advance_forward_once(input, &mut pos) != State::Accept {
            return start;
        }
    }
    pos
}

/// Validate with a diagnostic: the kind and offset of the first violation.
///
/// The offset names the byte where the automaton left its accepting path
/// (for truncated input, the end of the input), not the character start;
/// use [`find_invalid`] for the latter.
pub fn check(input: &[u8]) -> Result<(), DecodeError> {
    let mut pos = 0;
    while pos < input.len() {
        let state = dfa::advance_forward_once(input, &mut pos);
        if state != State::Accept {
            return Err(error_at(state, pos));
        }
    }
    Ok(())
}

/// Count characters, stopping at the slice end or at the first NUL byte.
pub fn char_length(input: &[u8]) -> Result<usize, DecodeError> {
    let mut pos = 0;
    let mut count = 0;
    while pos < input.len() && input[pos] != 0 {
        let state = dfa::advance_forward_once(input, &mut pos);
        if state != State::Accept {
            return Err(error_at(state, pos));
        }
        count += 1;
    }
    Ok(count)
}

/// Count characters of known-valid input, stopping at the slice end or at
/// the first NUL byte.
///
/// Steps with the unchecked walker: no automaton, no validation. On invalid
/// input the count is meaningless and out-of-range steps panic.
pub fn char_length_unchecked(input: &[u8]) -> usize {
    let mut pos = 0;
    let mut count = 0;
    while pos < input.len() && input[pos] != 0 {
        pos = crate::chars::unchecked::next(input, pos);
        count += 1;
    }
    count
}

/// First index at or after `from` holding a byte that can begin a character
/// (ASCII or a leading byte in 0xC2..=0xF4), or `input.len()`.
pub fn find_leading_byte(input: &[u8], from: usize) -> usize {
    let mut pos = from;
    while pos < input.len() {
        let b = input[pos];
        if b < 0x80 || (0xC2..=0xF4).contains(&b) {
            return pos;
        }
        pos += 1;
    }
    pos
}
