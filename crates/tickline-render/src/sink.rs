#![forbid(unsafe_code)]

//! Print sinks.
//!
//! A [`Sink`] is the only output channel of the engine. The engine calls
//! [`Sink::print`] with complete chunks and [`Sink::flush`] once per frame;
//! it never reads back what was written.

use std::io::{self, Write};

/// Destination for rendered text.
pub trait Sink {
    /// Append a chunk of text.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Push buffered output to the display.
    fn flush(&mut self) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn print(&mut self, text: &str) -> io::Result<()> {
        (**self).print(text)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

// ============================================================================
// Writer-backed sink
// ============================================================================

/// Sink over any [`io::Write`].
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    /// Wrap a writer.
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl WriteSink<io::BufWriter<io::Stdout>> {
    /// Buffered sink on standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::BufWriter::new(io::stdout()))
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

// ============================================================================
// Callback sink
// ============================================================================

/// Sink over a single callback.
///
/// The callback receives `Some(text)` for output and `None` as the flush
/// signal.
pub struct FnSink<F: FnMut(Option<&str>)> {
    f: F,
}

impl<F: FnMut(Option<&str>)> FnSink<F> {
    /// Wrap a callback.
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(Option<&str>)> Sink for FnSink<F> {
    #[inline]
    fn print(&mut self, text: &str) -> io::Result<()> {
        (self.f)(Some(text));
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        (self.f)(None);
        Ok(())
    }
}

// ============================================================================
// Capture sink
// ============================================================================

/// In-memory sink that records every byte and counts flushes.
#[derive(Debug, Default, Clone)]
pub struct CaptureSink {
    /// Everything printed so far.
    pub output: String,
    /// Number of flush calls.
    pub flushes: usize,
}

impl CaptureSink {
    /// Create an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the captured output, leaving the capture empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Sink for CaptureSink {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
