#![forbid(unsafe_code)]

//! Counting writer for tracking bytes formatted.
//!
//! Wraps any [`fmt::Write`] and tracks how many bytes were handed to it,
//! whether or not the inner writer kept them. Formatting through a
//! [`CountingWriter<Discard>`] is how the engine measures text without
//! producing it.
//!
//! # Usage
//!
//! ```
//! use std::fmt::Write;
//! use tickline_render::counting::{CountingWriter, Discard};
//!
//! let mut writer = CountingWriter::new(Discard);
//! write!(writer, "{:>6.2}", 3.14159).unwrap();
//! assert_eq!(writer.bytes_written(), 6);
//! ```

use std::fmt;

/// A write wrapper that counts bytes written.
#[derive(Debug)]
pub struct CountingWriter<W> {
    inner: W,
    bytes_written: usize,
}

impl<W> CountingWriter<W> {
    /// Create a new counting writer wrapping the given writer.
    #[inline]
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    /// Bytes written since creation.
    #[inline]
    #[must_use]
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
}

impl<W: fmt::Write> fmt::Write for CountingWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_str(s)?;
        self.bytes_written += s.len();
        Ok(())
    }
}

/// A writer that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl fmt::Write for Discard {
    #[inline]
    fn write_str(&mut self, _: &str) -> fmt::Result {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedBuf;
    use std::fmt::Write;

    #[test]
    fn counts_through_to_inner() {
        let mut text = String::new();
        let mut w = CountingWriter::new(&mut text);
        write!(w, "{}-{}", 12, "ab").unwrap();
        assert_eq!(w.bytes_written(), 5);
        assert_eq!(text, "12-ab");
    }

    #[test]
    fn counts_past_truncation() {
        let mut buf = FixedBuf::<4>::new();
        let mut w = CountingWriter::new(&mut buf);
        w.write_str("abcdefgh").unwrap();
        assert_eq!(w.bytes_written(), 8);
        assert_eq!(buf.as_str(), "abcd");
    }

    #[test]
    fn discard_counts_without_storing() {
        let mut w = CountingWriter::new(Discard);
        w.write_str("xyz").unwrap();
        w.write_str("q").unwrap();
        assert_eq!(w.bytes_written(), 4);
    }
}
