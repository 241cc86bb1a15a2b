#![forbid(unsafe_code)]

//! Output kernel: escape sequences, bounded buffers, and print sinks.
//!
//! Output is append-only. Everything the engine produces goes through a
//! [`Sink`] as complete, ready-to-display chunks, followed by one
//! [`Sink::flush`] at the end of each frame.

pub mod ansi;
pub mod buf;
pub mod color;
pub mod counting;
pub mod sink;

pub use buf::FixedBuf;
pub use counting::{CountingWriter, Discard};
pub use sink::{CaptureSink, FnSink, Sink, WriteSink};
