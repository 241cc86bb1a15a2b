#![forbid(unsafe_code)]

//! Code point and string display widths.
//!
//! Widths follow the classic `wcwidth` model, one code point at a time:
//!
//! | Class | Width |
//! |-------|-------|
//! | NUL | 0 |
//! | C0/C1 control | undisplayable (`None`) |
//! | Non-spacing combining mark | 0 |
//! | CJK, Hangul, fullwidth forms, most emoji | 2 |
//! | Everything else | 1 |
//!
//! Grapheme clustering (ZWJ sequences, flags) is not attempted; each code
//! point contributes its own width.

use crate::escape::{ESC, escape_len};
use crate::utf8::decode_codepoint;

/// Sorted, non-overlapping intervals of non-spacing marks (BMP and
/// supplementary planes). Searched with a binary search.
static COMBINING: &[(u32, u32)] = &[
    (0x0300, 0x036F), (0x0483, 0x0486), (0x0488, 0x0489), (0x0591, 0x05BD),
    (0x05BF, 0x05BF), (0x05C1, 0x05C2), (0x05C4, 0x05C5), (0x05C7, 0x05C7),
    (0x0600, 0x0603), (0x0610, 0x0615), (0x064B, 0x065E), (0x0670, 0x0670),
    (0x06D6, 0x06E4), (0x06E7, 0x06E8), (0x06EA, 0x06ED), (0x070F, 0x070F),
    (0x0711, 0x0711), (0x0730, 0x074A), (0x07A6, 0x07B0), (0x07EB, 0x07F3),
    (0x0901, 0x0902), (0x093C, 0x093C), (0x0941, 0x0948), (0x094D, 0x094D),
    (0x0951, 0x0954), (0x0962, 0x0963), (0x0981, 0x0981), (0x09BC, 0x09BC),
    (0x09C1, 0x09C4), (0x09CD, 0x09CD), (0x09E2, 0x09E3), (0x0A01, 0x0A02),
    (0x0A3C, 0x0A3C), (0x0A41, 0x0A42), (0x0A47, 0x0A48), (0x0A4B, 0x0A4D),
    (0x0A70, 0x0A71), (0x0A81, 0x0A82), (0x0ABC, 0x0ABC), (0x0AC1, 0x0AC5),
    (0x0AC7, 0x0AC8), (0x0ACD, 0x0ACD), (0x0AE2, 0x0AE3), (0x0B01, 0x0B01),
    (0x0B3C, 0x0B3C), (0x0B3F, 0x0B3F), (0x0B41, 0x0B43), (0x0B4D, 0x0B4D),
    (0x0B56, 0x0B56), (0x0B82, 0x0B82), (0x0BC0, 0x0BC0), (0x0BCD, 0x0BCD),
    (0x0C3E, 0x0C40), (0x0C46, 0x0C48), (0x0C4A, 0x0C4D), (0x0C55, 0x0C56),
    (0x0CBC, 0x0CBC), (0x0CBF, 0x0CBF), (0x0CC6, 0x0CC6), (0x0CCC, 0x0CCD),
    (0x0CE2, 0x0CE3), (0x0D41, 0x0D43), (0x0D4D, 0x0D4D), (0x0DCA, 0x0DCA),
    (0x0DD2, 0x0DD4), (0x0DD6, 0x0DD6), (0x0E31, 0x0E31), (0x0E34, 0x0E3A),
    (0x0E47, 0x0E4E), (0x0EB1, 0x0EB1), (0x0EB4, 0x0EB9), (0x0EBB, 0x0EBC),
    (0x0EC8, 0x0ECD), (0x0F18, 0x0F19), (0x0F35, 0x0F35), (0x0F37, 0x0F37),
    (0x0F39, 0x0F39), (0x0F71, 0x0F7E), (0x0F80, 0x0F84), (0x0F86, 0x0F87),
    (0x0F90, 0x0F97), (0x0F99, 0x0FBC), (0x0FC6, 0x0FC6), (0x102D, 0x1030),
    (0x1032, 0x1032), (0x1036, 0x1037), (0x1039, 0x1039), (0x1058, 0x1059),
    (0x1160, 0x11FF), (0x135F, 0x135F), (0x1712, 0x1714), (0x1732, 0x1734),
    (0x1752, 0x1753), (0x1772, 0x1773), (0x17B4, 0x17B5), (0x17B7, 0x17BD),
    (0x17C6, 0x17C6), (0x17C9, 0x17D3), (0x17DD, 0x17DD), (0x180B, 0x180D),
    (0x18A9, 0x18A9), (0x1920, 0x1922), (0x1927, 0x1928), (0x1932, 0x1932),
    (0x1939, 0x193B), (0x1A17, 0x1A18), (0x1B00, 0x1B03), (0x1B34, 0x1B34),
    (0x1B36, 0x1B3A), (0x1B3C, 0x1B3C), (0x1B42, 0x1B42), (0x1B6B, 0x1B73),
    (0x1DC0, 0x1DCA), (0x1DFE, 0x1DFF), (0x200B, 0x200F), (0x202A, 0x202E),
    (0x2060, 0x2063), (0x206A, 0x206F), (0x20D0, 0x20EF), (0x302A, 0x302F),
    (0x3099, 0x309A), (0xA806, 0xA806), (0xA80B, 0xA80B), (0xA825, 0xA826),
    (0xFB1E, 0xFB1E), (0xFE00, 0xFE0F), (0xFE20, 0xFE23), (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F), (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0xE0001, 0xE0001), (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];

/// Sorted blocks rendered two columns wide by common terminals, scanned
/// with early exit.
static WIDE_BLOCKS: &[(u32, u32)] = &[
    (0x2460, 0x24FF), // Enclosed Alphanumerics
    (0x2600, 0x26FF), // Miscellaneous Symbols
    (0x2B00, 0x2BFF), // Miscellaneous Symbols and Arrows
    (0xAC00, 0xD7A3), // Hangul Syllables
    (0xF900, 0xFAFF), // CJK Compatibility Ideographs
    (0xFE10, 0xFE19), // Vertical Forms
    (0xFE30, 0xFE6F), // CJK Compatibility Forms
    (0xFF00, 0xFF60), // Fullwidth Forms
    (0xFFE0, 0xFFE6), // Fullwidth Signs
];

/// Whether `cp` is a non-spacing mark.
#[must_use]
pub fn is_combining(cp: u32) -> bool {
    let (Some(first), Some(last)) = (COMBINING.first(), COMBINING.last()) else {
        return false;
    };
    if cp < first.0 || cp > last.1 {
        return false;
    }
    COMBINING
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Whether `cp` occupies two columns (assumes `cp` is not a combining mark).
#[must_use]
pub fn is_wide(cp: u32) -> bool {
    for &(lo, hi) in WIDE_BLOCKS {
        if cp < lo {
            break;
        }
        if cp <= hi {
            return true;
        }
    }
    if cp < 0x1100 {
        return false;
    }
    cp <= 0x115F // Hangul Jamo initial consonants
        || cp == 0x2329
        || cp == 0x232A
        || ((0x2E80..=0xA4CF).contains(&cp) && cp != 0x303F) // CJK .. Yi
        || (0x1F300..=0x1F6FF).contains(&cp) // pictographs, emoticons, transport
        || (0x1F900..=0x1F9FF).contains(&cp) // supplemental pictographs
        || (0x1FA70..=0x1FAFF).contains(&cp) // pictographs extended-A
        || (0x20000..=0x2FFFD).contains(&cp)
        || (0x30000..=0x3FFFD).contains(&cp)
}

/// Terminal column width of one code point.
///
/// Returns `None` for C0/C1 control characters: they cannot be displayed
/// and any text containing them has an ambiguous width.
#[must_use]
pub fn codepoint_width(cp: u32) -> Option<usize> {
    match cp {
        0 => Some(0),
        0x01..=0x1F | 0x7F..=0x9F => None,
        _ if is_combining(cp) => Some(0),
        _ if is_wide(cp) => Some(2),
        _ => Some(1),
    }
}

/// Display width of a byte string decoded with the loose decoder.
///
/// Escape sequences count as zero columns. Returns `None` if any other
/// control character is present.
#[must_use]
pub fn display_width_bytes(bytes: &[u8]) -> Option<usize> {
    let mut width = 0usize;
    let mut i = 0;
    while let Some(&b) = bytes.get(i) {
        // Printable ASCII fast path; same answer as the tables.
        if (0x20..0x7F).contains(&b) {
            width += 1;
            i += 1;
            continue;
        }
        if b == ESC {
            i += escape_len(&bytes[i..]);
            continue;
        }
        let (cp, len) = decode_codepoint(&bytes[i..]);
        width += codepoint_width(cp)?;
        i += len;
    }
    Some(width)
}

/// Display width of `text` in terminal columns.
///
/// Returns `None` if `text` contains a control character outside an escape
/// sequence.
#[must_use]
pub fn display_width(text: &str) -> Option<usize> {
    display_width_bytes(text.as_bytes())
}
