//! Forward walk: one character per call, left to right.

use alloc::vec::Vec;

use super::class::{class_of, CLASS_COUNT};
use super::lead::lead_of;
use super::{ending, State};

/// Forward transitions, indexed by `[state.row()][class as usize]`.
///
/// Rows are the working states S1..=S7; columns follow the `CharClass`
/// discriminants: Ascii, Cont1, Cont2, Cont3, Lead2, Lead3E0, Lead3,
/// Lead3Ed, Lead4F0, Lead4, Lead4F4, Illegal. Only continuation classes can
/// keep a character alive, so the eight non-continuation columns of every
/// row are `ErrCont`; the interesting entries are the overlong gate on S2
/// and S5, the surrogate gate on S3, and the upper-bound gate on S7.
#[rustfmt::skip]
static FORWARD: [[State; CLASS_COUNT]; 7] = {
    use State::{Accept as OK, ErrCont as EC, ErrOverlong as EO, S1, S4};
    [
        // S1: one continuation byte completes the character.
        [EC, OK, OK, OK, EC, EC, EC, EC, EC, EC, EC, EC],
        // S2 (after 0xE0): only 0xA0..=0xBF avoids an overlong encoding.
        [EC, EO, EO, S1, EC, EC, EC, EC, EC, EC, EC, EC],
        // S3 (after 0xED): 0xA0..=0xBF would be a surrogate.
        [EC, S1, S1, EC, EC, EC, EC, EC, EC, EC, EC, EC],
        // S4: second position of a regular 3-byte character.
        [EC, S1, S1, S1, EC, EC, EC, EC, EC, EC, EC, EC],
        // S5 (after 0xF0): 0x80..=0x8F would be overlong.
        [EC, EO, S4, S4, EC, EC, EC, EC, EC, EC, EC, EC],
        // S6: second position of a regular 4-byte character.
        [EC, S4, S4, S4, EC, EC, EC, EC, EC, EC, EC, EC],
        // S7 (after 0xF4): only 0x80..=0x8F stays at or below U+10FFFF.
        [EC, S4, EC, EC, EC, EC, EC, EC, EC, EC, EC, EC],
    ]
};

/// Step over one character, advancing `pos` past every byte examined.
///
/// Returns `Accept` with `pos` on the next character boundary, or an error
/// state with `pos` just past the offending byte. The caller guarantees
/// `*pos < input.len()`.
#[inline]
pub fn advance_forward_once(input: &[u8], pos: &mut usize) -> State {
    debug_assert!(*pos < input.len());
    let byte = input[*pos];
    *pos += 1;
    if byte < 0x80 {
        return State::Accept;
    }
    let mut state = lead_of(byte).next;
    while *pos < input.len() && state.is_working() {
        state = FORWARD[state.row()][class_of(input[*pos]) as usize];
        *pos += 1;
    }
    ending(state)
}

/// Step over one character and return its decoded scalar value bits.
///
/// The accumulator starts from the leading byte's payload and takes six bits
/// from each accepted continuation byte. The value is meaningful only when
/// the returned state is `Accept`.
#[inline]
pub fn decode_forward_once(input: &[u8], pos: &mut usize) -> (State, u32) {
    debug_assert!(*pos < input.len());
    let byte = input[*pos];
    *pos += 1;
    if byte < 0x80 {
        return (State::Accept, byte as u32);
    }
    let lead = lead_of(byte);
    let mut state = lead.next;
    let mut value = lead.payload as u32;
    while *pos < input.len() && state.is_working() {
        let b = input[*pos];
        state = FORWARD[state.row()][class_of(b) as usize];
        *pos += 1;
        if !state.is_error() {
            value = (value << 6) | (b & 0x3F) as u32;
        }
    }
    (ending(state), value)
}

/// Step over one character, appending every byte examined to `sink`.
///
/// The sink reflects exactly what was read, whatever the outcome; callers
/// that need only valid bytes must observe the returned state.
#[inline]
pub fn copy_forward_once(input: &[u8], pos: &mut usize, sink: &mut Vec<u8>) -> State {
    let start = *pos;
    let state = advance_forward_once(input, pos);
    sink.extend_from_slice(&input[start..*pos]);
    state
}
