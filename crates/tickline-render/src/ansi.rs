#![forbid(unsafe_code)]

//! ANSI escape sequences used by the redraw protocol.
//!
//! These are fixed protocol constants. Correct in-place redraw depends on
//! their exact semantics, so they are spelled out byte for byte.
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ n F` | CPL (Cursor Previous Line, to column 1) |
//! | CSI | `ESC [ 0 K` | EL (Erase from cursor to end of line) |
//! | CSI | `ESC [ 0 J` | ED (Erase from cursor to end of screen) |
//! | DEC | `ESC [ ? 25 l/h` | DECTCEM (hide/show cursor) |
//! | DEC | `ESC [ ? 7 l/h` | DECAWM (auto-wrap off/on) |

use std::fmt;

use crate::buf::FixedBuf;

/// Hide the cursor: `CSI ? 25 l`.
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// Show the cursor: `CSI ? 25 h`.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Erase from the cursor to the end of the line: `CSI 0 K`.
pub const ERASE_TO_LINE_END: &str = "\x1b[0K";

/// Erase from the cursor to the end of the screen: `CSI 0 J`.
pub const ERASE_TO_SCREEN_END: &str = "\x1b[0J";

/// Disable line auto-wrap: `CSI ? 7 l`.
pub const AUTO_WRAP_DISABLE: &str = "\x1b[?7l";

/// Enable line auto-wrap: `CSI ? 7 h`.
pub const AUTO_WRAP_ENABLE: &str = "\x1b[?7h";

/// Preamble written at the start of every frame: hide the cursor, stop the
/// terminal wrapping long lines, and return to column 0.
pub const FRAME_PREAMBLE: &str = "\x1b[?25l\x1b[?7l\r";

/// Written once when the display is finalized: leave the last line, then
/// restore auto-wrap and the cursor.
pub const FRAME_FINALE: &str = "\n\x1b[?7h\x1b[?25h";

/// Written when a frame has fewer lines than the previous one: move to a
/// fresh line and clear everything below it.
pub const SHRINK_CLEAR: &str = "\n\x1b[0J";

/// Line separator between lines of one frame.
pub const LINE_SEPARATOR: &str = "\n";

/// Buffer large enough for any CPL sequence (`ESC [` + 5 digits + `F`).
pub type CursorSeq = FixedBuf<16>;

/// Write CPL (cursor previous line): `CSI n F`.
///
/// Moves the cursor up `n` lines and to column 1.
pub fn write_cursor_prev_line<W: fmt::Write>(w: &mut W, n: u16) -> fmt::Result {
    write!(w, "\x1b[{n}F")
}

/// CPL sequence as an owned stack buffer.
#[must_use]
pub fn cursor_prev_line(n: u16) -> CursorSeq {
    let mut seq = CursorSeq::new();
    // FixedBuf never reports an error; it truncates instead.
    let _ = write_cursor_prev_line(&mut seq, n);
    seq
}
