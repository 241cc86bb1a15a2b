#![forbid(unsafe_code)]

//! Width-bounded clipping at code point boundaries.

use crate::escape::{ESC, escape_len};
use crate::utf8::decode_codepoint;
use crate::width::codepoint_width;

/// A clipped slice of the input and its display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip<'a> {
    /// The kept text.
    pub text: &'a str,
    /// Columns occupied by `text`.
    pub width: usize,
}

/// Smallest indivisible piece of text: one code point or one escape sequence.
#[derive(Debug, Clone, Copy)]
struct Unit {
    len: usize,
    width: usize,
    escape: bool,
}

/// `bytes` must be non-empty. `None` for undisplayable code points.
fn leading_unit(bytes: &[u8]) -> Option<Unit> {
    if bytes.first() == Some(&ESC) {
        return Some(Unit {
            len: escape_len(bytes),
            width: 0,
            escape: true,
        });
    }
    let (cp, len) = decode_codepoint(bytes);
    Some(Unit {
        len,
        width: codepoint_width(cp)?,
        escape: false,
    })
}

/// Longest prefix of `text` that fits in `max_cols` columns.
///
/// Zero-width marks following the last kept character stay attached to it.
/// Returns `None` if an undisplayable character is reached before the cut.
#[must_use]
pub fn clip_prefix(text: &str, max_cols: usize) -> Option<Clip<'_>> {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut width = 0;
    while end < bytes.len() {
        let unit = leading_unit(&bytes[end..])?;
        if width + unit.width > max_cols {
            break;
        }
        width += unit.width;
        end += unit.len;
    }
    Some(Clip {
        text: text.get(..end)?,
        width,
    })
}

/// Longest suffix of `text` that fits in `max_cols` columns.
///
/// Zero-width marks orphaned by the cut are dropped along with their base
/// character. Returns `None` if `text` contains an undisplayable character.
#[must_use]
pub fn clip_suffix(text: &str, max_cols: usize) -> Option<Clip<'_>> {
    let bytes = text.as_bytes();
    let mut remaining = crate::width::display_width(text)?;
    let mut start = 0;
    while remaining > max_cols && start < bytes.len() {
        let unit = leading_unit(&bytes[start..])?;
        remaining -= unit.width;
        start += unit.len;
    }
    while start > 0 && start < bytes.len() {
        let unit = leading_unit(&bytes[start..])?;
        if unit.escape || unit.width != 0 {
            break;
        }
        start += unit.len;
    }
    Some(Clip {
        text: text.get(start..)?,
        width: remaining,
    })
}
