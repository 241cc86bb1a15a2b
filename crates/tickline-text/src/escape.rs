#![forbid(unsafe_code)]

//! ANSI escape sequence recognition.
//!
//! Colour and attribute sequences pass through widgets as opaque text, so
//! they must occupy zero columns when measured. Handles:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + one character (a whole UTF-8
//!   sequence when the character is not ASCII)

/// The escape byte.
pub const ESC: u8 = 0x1B;

/// Length in bytes of the escape sequence at the start of `bytes`.
///
/// `bytes[0]` must be [`ESC`]. Unterminated sequences run to the end of the
/// slice. The result is always at least 1 for non-empty input.
#[must_use]
pub fn escape_len(bytes: &[u8]) -> usize {
    if bytes.is_empty() {
        return 0;
    }
    let Some(&kind) = bytes.get(1) else {
        return 1;
    };
    match kind {
        b'[' => skip_csi(bytes, 2),
        b']' | b'P' | b'^' | b'_' => skip_string_terminated(bytes, 2),
        lead => (1 + sequence_len(lead)).min(bytes.len()),
    }
}

/// Bytes in the UTF-8 sequence introduced by `lead`.
const fn sequence_len(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// CSI: parameter bytes (0x30-0x3F), intermediate bytes (0x20-0x2F),
/// final byte (0x40-0x7E).
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while let Some(&b) = bytes.get(i) {
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            // Invalid byte: end the sequence before it.
            return i;
        }
        i += 1;
    }
    bytes.len()
}

/// OSC/DCS/PM/APC: terminated by BEL or ST (`ESC \`).
fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while let Some(&b) = bytes.get(i) {
        if b == 0x07 {
            return i + 1;
        }
        if b == ESC {
            return if bytes.get(i + 1) == Some(&b'\\') {
                i + 2
            } else {
                i
            };
        }
        i += 1;
    }
    bytes.len()
}
