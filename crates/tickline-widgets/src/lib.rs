#![forbid(unsafe_code)]

//! Values, widgets, number formatting, and line layout.
//!
//! A line is a [`Widget`] tree paired with a [`Value`] tree of the same
//! shape. [`layout::draw`] settles every width on the line, then streams the
//! text to a [`tickline_render::Sink`].
//!
//! ```
//! use tickline_render::CaptureSink;
//! use tickline_widgets::prelude::*;
//!
//! static EDGE: Widget = Widget::Label(">");
//! static PARTS: [Widget; 2] = [
//!     Widget::ProgressBar(ProgressBar::auto("[", "]", "=", " ", &EDGE)),
//!     Widget::ProgressFraction(NumberFormat::PLAIN.width(6)),
//! ];
//! static LINE: Widget = Widget::Composite(Composite::new(&PARTS));
//!
//! let progress = Progress::from_pair(Some(Value::Int(3)), Some(Value::Int(10))).unwrap();
//! let env = DrawEnv::new(20, 0, progress);
//! let values = [Value::Null, Value::Null];
//! let mut sink = CaptureSink::new();
//! let cols = draw(&mut sink, &LINE, Value::Composite(&values), &env).unwrap();
//! assert_eq!(cols, 20);
//! assert_eq!(sink.output, "[===>        ]  3/10");
//! ```

pub mod format;
pub mod layout;
pub mod progress;
pub mod string;
pub mod value;
pub mod widget;

pub use format::{NumberFormat, PercentFormat, Unit};
pub use layout::{DrawEnv, draw, natural_width, validate};
pub use progress::Progress;
pub use value::Value;
pub use widget::{
    Composite, LabelStep, PingPongBar, ProgressBar, ProgressLabel, Spinner, StringField, Widget,
};

/// Everything needed to define and draw lines.
pub mod prelude {
    pub use crate::format::{NumberFormat, PercentFormat, Unit};
    pub use crate::layout::{DrawEnv, draw, natural_width, validate};
    pub use crate::progress::Progress;
    pub use crate::value::Value;
    pub use crate::widget::{
        Composite, LabelStep, PingPongBar, ProgressBar, ProgressLabel, Spinner, StringField,
        Widget, frames,
    };
}
