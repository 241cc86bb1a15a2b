#![forbid(unsafe_code)]

//! Core: error kinds, logging shim, and the terminal geometry collaborator.
//!
//! Nothing in this crate writes to the terminal. The engine crates receive
//! terminal facts as plain values; [`terminal::TerminalGeometry`] is the one
//! place that asks the operating system for them.

pub mod error;
pub mod logging;
pub mod terminal;

pub use error::{Error, Result};
pub use terminal::TerminalGeometry;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};
