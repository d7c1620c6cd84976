//! Lossy repair of arbitrary byte sequences into valid UTF-8.

use alloc::vec::Vec;

use super::{encode_one_into, find_leading_byte};
use crate::codepoint::CodePoint;
use crate::dfa::{self, State};

/// Copy `input` to `sink`, substituting `replacement` for each maximal
/// invalid subsequence.
///
/// Valid characters pass through byte-for-byte, so sanitizing valid input is
/// the identity and sanitizing twice equals sanitizing once. After an error
/// the scan resynchronizes at the next byte that can begin a character, so a
/// run of garbage collapses into a single replacement. The output is always
/// valid UTF-8 and this operation cannot fail.
///
/// # Examples
///
/// ```
/// use charwise::{sanitize_default, validate};
///
/// let input = [0x41, 0xC2, 0xA3, 0x80, 0xFF, 0x42];
/// let mut out = Vec::new();
/// sanitize_default(&input, &mut out);
/// assert_eq!(out, b"A\xC2\xA3\xEF\xBF\xBD\xEF\xBF\xBDB");
/// assert!(validate(&out));
/// ```
pub fn sanitize(input: &[u8], sink: &mut Vec<u8>, replacement: CodePoint) {
    let mut rep = [0u8; 4];
    let rep_len = encode_one_into(replacement, &mut rep);

    let mut scratch = Vec::with_capacity(4);
    let mut pos = 0;
    while pos < input.len() {
        scratch.clear();
        match dfa::copy_forward_once(input, &mut pos, &mut scratch) {
            State::Accept => sink.extend_from_slice(&scratch),
            _ => {
                sink.extend_from_slice(&rep[..rep_len]);
                pos = find_leading_byte(input, pos);
            }
        }
    }
}

/// [`sanitize`] with U+FFFD REPLACEMENT CHARACTER.
pub fn sanitize_default(input: &[u8], sink: &mut Vec<u8>) {
    sanitize(input, sink, CodePoint::REPLACEMENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::validate;

    fn run(input: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        sanitize_default(input, &mut out);
        out
    }

    #[test]
    fn empty_input() {
        assert_eq!(run(b""), b"");
    }

    #[test]
    fn valid_input_is_identity() {
        for s in ["", "plain", "héllo 日本 🎉", "\u{10FFFF}\u{FFFD}"] {
            assert_eq!(run(s.as_bytes()), s.as_bytes());
        }
    }

    #[test]
    fn mixed_stream() {
        // A £ <stray continuation> 𐍈 <illegal byte> B
        let input = [
            0x41, 0xC2, 0xA3, 0x80, 0xF0, 0x90, 0x8D, 0x88, 0xFF, 0x42,
        ];
        let expected = [
            0x41, 0xC2, 0xA3, 0xEF, 0xBF, 0xBD, 0xF0, 0x90, 0x8D, 0x88, 0xEF, 0xBF, 0xBD, 0x42,
        ];
        assert_eq!(run(&input), expected);
    }

    #[test]
    fn garbage_run_collapses_to_one_replacement() {
        // The continuation bytes after the failure are part of the same
        // maximal invalid subsequence.
        let input = [0x41, 0xF5, 0x80, 0x80, 0x80, 0x42];
        assert_eq!(run(&input), b"A\xEF\xBF\xBDB");
    }

    #[test]
    fn truncated_tail() {
        let input = [0x41, 0xE0, 0xA0];
        assert_eq!(run(&input), b"A\xEF\xBF\xBD");
    }

    #[test]
    fn overlong_and_surrogate() {
        // Overlong euro sign: one replacement, resync consumes the tail.
        assert_eq!(run(&[0xF0, 0x82, 0x82, 0xAC]), b"\xEF\xBF\xBD");
        // Surrogate U+D800
        assert_eq!(run(&[0xED, 0xA0, 0x80]), b"\xEF\xBF\xBD");
    }

    #[test]
    fn custom_replacement() {
        let mut out = Vec::new();
        sanitize(&[0xFF], &mut out, CodePoint::new(0x3F).unwrap());
        assert_eq!(out, b"?");
    }

    #[test]
    fn output_always_validates() {
        // A handful of adversarial shapes; the property test covers random
        // noise at scale.
        let cases: &[&[u8]] = &[
            &[0xFF; 16],
            &[0x80; 16],
            &[0xC2],
            &[0xE0, 0x80],
            &[0xF4, 0x90, 0x80, 0x80],
            &[0xED, 0xBF, 0xBF, 0x41],
            &[0x41, 0xC0, 0xAF, 0x42],
        ];
        for &input in cases {
            let out = run(input);
            assert!(validate(&out), "input {:02X?} gave {:02X?}", input, out);
        }
    }

    #[test]
    fn idempotent() {
        let cases: &[&[u8]] = &[
            &[0xFF, 0x41, 0x80, 0xE0, 0xA0],
            &[0xF0, 0x82, 0x82, 0xAC],
            b"already valid",
        ];
        for &input in cases {
            let once = run(input);
            let twice = run(&once);
            assert_eq!(once, twice);
        }
    }
}
