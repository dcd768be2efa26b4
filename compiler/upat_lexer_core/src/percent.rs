//! UTF-8 validating percent-decoder.
//!
//! Each `%XX` escape contributes one byte to a table-driven DFA. A code point
//! is emitted only when the automaton reaches the accept state, which it does
//! only for complete, non-overlong, in-range sequences (no surrogates, nothing
//! above U+10FFFF). Text outside escapes is copied through unchanged.
//!
//! Decoding fails (returns `None`) when:
//! - an escape is truncated or contains a non-hex digit,
//! - a byte cannot continue the current sequence,
//! - the text after an incomplete sequence is not another `%` escape.

use std::borrow::Cow;

const UTF8_ACCEPT: u8 = 12;
const UTF8_REJECT: u8 = 0;

/// Byte → character class (256 entries), then state × class → next state
/// (9 rows of 12), then class → payload mask (12 entries).
#[rustfmt::skip]
static UTF8_DATA: [u8; 376] = [
    // byte classes
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    6, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 8, 7, 7,
    10, 9, 9, 9, 11, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,

    // state transitions
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    12, 0, 0, 0, 0, 24, 36, 48, 60, 72, 84, 96,
    0, 12, 12, 12, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 24, 24, 24, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 24, 24, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 48, 48, 48, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 48, 48, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 48, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,

    // payload masks
    0x7F, 0x3F, 0x3F, 0x3F, 0x00, 0x1F, 0x0F, 0x0F, 0x0F, 0x07, 0x07, 0x07,
];

const TRANSITIONS: usize = 256;
const MASKS: usize = 256 + 108;

/// Output target for decoded text.
trait DecodeSink {
    fn push_str(&mut self, text: &str);
    /// `code_point` is always a valid Unicode scalar value.
    fn push_code_point(&mut self, code_point: u32) -> bool;
}

impl DecodeSink for String {
    fn push_str(&mut self, text: &str) {
        String::push_str(self, text);
    }

    fn push_code_point(&mut self, code_point: u32) -> bool {
        match char::from_u32(code_point) {
            Some(c) => {
                self.push(c);
                true
            }
            None => false,
        }
    }
}

/// UTF-16 code units, with supplementary-plane code points split into
/// surrogate pairs.
struct Utf16(Vec<u16>);

impl DecodeSink for Utf16 {
    fn push_str(&mut self, text: &str) {
        self.0.extend(text.encode_utf16());
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "each unit is bounded to 16 bits by construction"
    )]
    fn push_code_point(&mut self, code_point: u32) -> bool {
        if code_point <= 0xFFFF {
            self.0.push(code_point as u16);
        } else {
            self.0.push((0xD7C0 + (code_point >> 10)) as u16);
            self.0.push((0xDC00 + (code_point & 0x3FF)) as u16);
        }
        true
    }
}

/// Decode `%XX` escapes in `input`.
///
/// Returns `Cow::Borrowed` when the input has no `%` at all, and `None`
/// when an escape sequence is not well-formed UTF-8.
pub fn decode_percent(input: &str) -> Option<Cow<'_, str>> {
    if memchr::memchr(b'%', input.as_bytes()).is_none() {
        return Some(Cow::Borrowed(input));
    }
    let mut out = String::with_capacity(input.len());
    decode_into(input, &mut out).then_some(Cow::Owned(out))
}

/// Decode `%XX` escapes in `input` into UTF-16 code units.
pub fn decode_percent_utf16(input: &str) -> Option<Vec<u16>> {
    let mut out = Utf16(Vec::with_capacity(input.len()));
    decode_into(input, &mut out).then_some(out.0)
}

fn decode_into<S: DecodeSink>(input: &str, sink: &mut S) -> bool {
    let bytes = input.as_bytes();
    let Some(first) = memchr::memchr(b'%', bytes) else {
        sink.push_str(input);
        return true;
    };

    let mut last = 0;
    let mut start_of_octets = first;
    let mut pos = first;
    let mut state = UTF8_ACCEPT;
    let mut code_point: u32 = 0;

    while pos < bytes.len() {
        let Some(byte) = escaped_byte(bytes, pos) else {
            return false;
        };
        let class = UTF8_DATA[byte as usize];
        state = UTF8_DATA[TRANSITIONS + state as usize + class as usize];
        code_point = (code_point << 6) | u32::from(byte & UTF8_DATA[MASKS + class as usize]);

        if state == UTF8_ACCEPT {
            sink.push_str(&input[last..start_of_octets]);
            if !sink.push_code_point(code_point) {
                return false;
            }
            code_point = 0;
            last = pos + 3;
            match memchr::memchr(b'%', &bytes[last..]) {
                Some(offset) => {
                    start_of_octets = last + offset;
                    pos = start_of_octets;
                }
                None => break,
            }
        } else if state == UTF8_REJECT {
            return false;
        } else {
            // Mid-sequence: the next byte must be another escape.
            pos += 3;
            if bytes.get(pos) != Some(&b'%') {
                return false;
            }
        }
    }

    sink.push_str(&input[last..]);
    true
}

/// Read the byte encoded by the escape starting at `bytes[pos] == b'%'`.
fn escaped_byte(bytes: &[u8], pos: usize) -> Option<u8> {
    let high = hex_value(*bytes.get(pos + 1)?)?;
    let low = hex_value(*bytes.get(pos + 2)?)?;
    Some(high << 4 | low)
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
