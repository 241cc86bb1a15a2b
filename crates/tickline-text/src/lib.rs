#![forbid(unsafe_code)]

//! Display-width oracle for terminal text.
//!
//! Everything the layout engine knows about how many columns a piece of text
//! occupies comes from this crate:
//! - [`decode_codepoint`] - loose, always-advancing UTF-8 decoding
//! - [`codepoint_width`] - 0, 1, or 2 columns, or `None` for control characters
//! - [`display_width`] - sum over a string, with ANSI escape sequences at zero width
//! - [`clip_prefix`] / [`clip_suffix`] - longest fitting slice at code point boundaries
//!
//! # Example
//! ```
//! use tickline_text::{clip_prefix, display_width};
//!
//! assert_eq!(display_width("progress"), Some(8));
//! assert_eq!(display_width("進捗"), Some(4));
//! assert_eq!(display_width("\x1b[92m✓\x1b[0m"), Some(1));
//! assert_eq!(display_width("tab\there"), None);
//!
//! let clip = clip_prefix("abcdefgh", 5).unwrap();
//! assert_eq!(clip.text, "abcde");
//! ```

pub mod clip;
pub mod escape;
pub mod utf8;
pub mod width;

pub use clip::{Clip, clip_prefix, clip_suffix};
pub use escape::escape_len;
pub use utf8::{Codepoints, MAX_CODEPOINT, codepoints, decode_codepoint};
pub use width::{codepoint_width, display_width, display_width_bytes, is_combining, is_wide};
