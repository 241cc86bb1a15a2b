#![forbid(unsafe_code)]

//! Best-effort UTF-8 decoding, one code point at a time.
//!
//! This is deliberately not a validator. Program output handed to a status
//! line is not always clean, and the decoder must keep making progress no
//! matter what bytes it sees:
//!
//! - every call on a non-empty slice consumes at least one byte;
//! - continuation bytes are folded into the current code point for as long
//!   as they keep coming, so overlong forms decode to their numeric value;
//! - a stray continuation byte is folded into whatever was accumulated;
//! - an accumulated value above U+10FFFF keeps consuming until it is back in
//!   range or the input ends.
//!
//! No replacement character is substituted. Callers get the raw value and
//! [`crate::codepoint_width`] treats out-of-range values as one column.

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

#[inline]
const fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

#[inline]
const fn fold(cp: u32, b: u8) -> u32 {
    match b {
        0x00..=0x7F => b as u32,
        0x80..=0xBF => (cp << 6) | (b & 0x3F) as u32,
        0xC0..=0xDF => (b & 0x1F) as u32,
        0xE0..=0xEF => (b & 0x0F) as u32,
        _ => (b & 0x07) as u32,
    }
}

/// Decode the code point at the start of `bytes`.
///
/// Returns `(codepoint, bytes_consumed)`. An empty slice yields `(0, 0)`;
/// any other input consumes between one byte and the whole slice.
#[must_use]
pub fn decode_codepoint(bytes: &[u8]) -> (u32, usize) {
    let Some(&lead) = bytes.first() else {
        return (0, 0);
    };
    let mut cp = fold(0, lead);
    let mut len = 1;
    while let Some(&next) = bytes.get(len) {
        if !is_continuation(next) && cp <= MAX_CODEPOINT {
            break;
        }
        cp = fold(cp, next);
        len += 1;
    }
    (cp, len)
}

/// Iterator over `(codepoint, raw_bytes)` pairs of a byte slice.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    rest: &'a [u8],
}

/// Iterate the code points of `bytes` with the loose decoder.
#[must_use]
pub fn codepoints(bytes: &[u8]) -> Codepoints<'_> {
    Codepoints { rest: bytes }
}

impl<'a> Iterator for Codepoints<'a> {
    type Item = (u32, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (cp, len) = decode_codepoint(self.rest);
        let (raw, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some((cp, raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_one_byte() {
        assert_eq!(decode_codepoint(b"abc"), ('a' as u32, 1));
    }

    #[test]
    fn empty_consumes_nothing() {
        assert_eq!(decode_codepoint(b""), (0, 0));
    }

    #[test]
    fn multibyte_sequences_match_std() {
        for s in ["é", "中", "😀", "\u{10FFFF}", "\u{0300}"] {
            let c = s.chars().next().unwrap();
            assert_eq!(decode_codepoint(s.as_bytes()), (c as u32, s.len()), "{s:?}");
        }
    }

    #[test]
    fn stops_at_next_lead_byte() {
        let bytes = "中a".as_bytes();
        assert_eq!(decode_codepoint(bytes), (0x4E2D, 3));
    }

    #[test]
    fn truncated_sequence_still_advances() {
        // Lead byte of a 3-byte sequence followed by ASCII.
        let (cp, len) = decode_codepoint(&[0xE4, b'a']);
        assert_eq!(len, 1);
        assert_eq!(cp, 0x04);
    }

    #[test]
    fn stray_continuation_bytes_are_folded() {
        let (_, len) = decode_codepoint(&[0x80, 0x80, b'x']);
        assert_eq!(len, 2);
    }

    #[test]
    fn overlong_encoding_decodes_to_numeric_value() {
        // 0xC1 0x81 is an overlong 'A'.
        assert_eq!(decode_codepoint(&[0xC1, 0x81]), (0x41, 2));
    }

    #[test]
    fn out_of_range_keeps_consuming() {
        // F7 BF BF BF accumulates 0x1FFFFF, which is above U+10FFFF, so the
        // following ASCII byte is folded in too.
        let (cp, len) = decode_codepoint(&[0xF7, 0xBF, 0xBF, 0xBF, b'z']);
        assert_eq!(len, 5);
        assert_eq!(cp, 'z' as u32);
    }

    #[test]
    fn iterator_covers_every_byte() {
        let bytes = [0xFF, 0xFE, b'a', 0xC3, 0xA9, 0x80];
        let total: usize = codepoints(&bytes).map(|(_, raw)| raw.len()).sum();
        assert_eq!(total, bytes.len());
    }
}
