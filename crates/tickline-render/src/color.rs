#![forbid(unsafe_code)]

//! SGR color sequences for decorating labels and fills.
//!
//! The engine never interprets these: they are opaque strings that measure
//! zero columns and pass straight through to the sink. See
//! <https://en.wikipedia.org/wiki/ANSI_escape_code#Colors>.
//!
//! ```
//! use tickline_render::{color, fg_256};
//!
//! let ok = concat!("\x1b[92m", "done", "\x1b[0m");
//! assert!(ok.starts_with(color::FG_GREEN_BRIGHT));
//! assert_eq!(fg_256!(208), "\x1b[38;5;208m");
//! ```

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

pub const FG_BLACK: &str = "\x1b[30m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_MAGENTA: &str = "\x1b[35m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_WHITE: &str = "\x1b[37m";
pub const FG_BLACK_BRIGHT: &str = "\x1b[90m";
pub const FG_RED_BRIGHT: &str = "\x1b[91m";
pub const FG_GREEN_BRIGHT: &str = "\x1b[92m";
pub const FG_YELLOW_BRIGHT: &str = "\x1b[93m";
pub const FG_BLUE_BRIGHT: &str = "\x1b[94m";
pub const FG_MAGENTA_BRIGHT: &str = "\x1b[95m";
pub const FG_CYAN_BRIGHT: &str = "\x1b[96m";
pub const FG_WHITE_BRIGHT: &str = "\x1b[97m";

pub const BG_BLACK: &str = "\x1b[40m";
pub const BG_RED: &str = "\x1b[41m";
pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_YELLOW: &str = "\x1b[43m";
pub const BG_BLUE: &str = "\x1b[44m";
pub const BG_MAGENTA: &str = "\x1b[45m";
pub const BG_CYAN: &str = "\x1b[46m";
pub const BG_WHITE: &str = "\x1b[47m";
pub const BG_BLACK_BRIGHT: &str = "\x1b[100m";
pub const BG_RED_BRIGHT: &str = "\x1b[101m";
pub const BG_GREEN_BRIGHT: &str = "\x1b[102m";
pub const BG_YELLOW_BRIGHT: &str = "\x1b[103m";
pub const BG_BLUE_BRIGHT: &str = "\x1b[104m";
pub const BG_MAGENTA_BRIGHT: &str = "\x1b[105m";
pub const BG_CYAN_BRIGHT: &str = "\x1b[106m";
pub const BG_WHITE_BRIGHT: &str = "\x1b[107m";

/// 256-color foreground sequence built at compile time.
#[macro_export]
macro_rules! fg_256 {
    ($n:literal) => {
        concat!("\x1b[38;5;", stringify!($n), "m")
    };
}

/// 256-color background sequence built at compile time.
#[macro_export]
macro_rules! bg_256 {
    ($n:literal) => {
        concat!("\x1b[48;5;", stringify!($n), "m")
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_indexes_are_consistent() {
        assert_eq!(FG_RED, "\x1b[31m");
        assert_eq!(BG_RED_BRIGHT, "\x1b[101m");
        assert_eq!(crate::bg_256!(17), "\x1b[48;5;17m");
    }
}
