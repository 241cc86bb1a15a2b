#![forbid(unsafe_code)]

//! Tickline public facade crate.
//!
//! Re-exports the pieces needed to describe status lines and redraw them in
//! place: values and widgets, the frame controller, output sinks, terminal
//! geometry, and the shared error type.
//!
//! ```
//! use tickline::prelude::*;
//!
//! static PARTS: [Widget; 2] = [
//!     Widget::Spinner(Spinner::new(frames::LINE, 100)),
//!     Widget::Label(" fetching"),
//! ];
//! static LINE: Widget = Widget::Composite(Composite::new(&PARTS));
//!
//! let mut ctx = FrameContext::new(CaptureSink::new());
//! let values = [Value::Null, Value::Null];
//! ctx.begin(40, 16).unwrap();
//! ctx.draw_line(None, None, &LINE, Value::Composite(&values)).unwrap();
//! ctx.end(true).unwrap();
//! assert!(ctx.sink().output.contains("| fetching"));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use tickline_core::{Error, Result, TerminalGeometry};

// --- Render re-exports -----------------------------------------------------

pub use tickline_render::{CaptureSink, FnSink, Sink, WriteSink};

// --- Widget re-exports -----------------------------------------------------

pub use tickline_widgets::{
    Composite, DrawEnv, LabelStep, NumberFormat, PercentFormat, PingPongBar, Progress,
    ProgressBar, ProgressLabel, Spinner, StringField, Unit, Value, Widget,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use tickline_runtime::{FrameContext, FramePhase, LineId, LineSet, LineValues};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CaptureSink, Composite, DrawEnv, Error, LabelStep, NumberFormat, PercentFormat, PingPongBar,
        Progress, ProgressBar, ProgressLabel, Result, Sink, Spinner, StringField,
        TerminalGeometry, Unit, Value, Widget, WriteSink,
    };
    pub use tickline_render::color;
    pub use tickline_widgets::widget::frames;

    #[cfg(feature = "runtime")]
    pub use crate::{FrameContext, LineId, LineSet, LineValues};

    pub use crate::{core, render, text, widgets};
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use tickline_core as core;
pub use tickline_render as render;
#[cfg(feature = "runtime")]
pub use tickline_runtime as runtime;
pub use tickline_text as text;
pub use tickline_widgets as widgets;
