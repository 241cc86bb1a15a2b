#![forbid(unsafe_code)]

//! Frame protocol for in-place multi-line status displays.
//!
//! [`FrameContext`] turns a sequence of lines into redraw output for one
//! stream. [`LineSet`] keeps a registry of lines on top of it for callers
//! that would rather add and remove lines than list them every frame.
//!
//! ```
//! use tickline_render::CaptureSink;
//! use tickline_runtime::FrameContext;
//! use tickline_widgets::{Value, Widget};
//!
//! static DONE: Widget = Widget::Label("done");
//!
//! let mut ctx = FrameContext::new(CaptureSink::new());
//! ctx.begin(80, 16).unwrap();
//! ctx.draw_line(None, None, &DONE, Value::Null).unwrap();
//! ctx.end(true).unwrap();
//! assert!(ctx.sink().output.contains("done"));
//! ```

pub mod frame;
pub mod retained;

pub use frame::{FrameContext, FramePhase};
pub use retained::{LineId, LineSet, LineValues};
