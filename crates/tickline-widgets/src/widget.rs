#![forbid(unsafe_code)]

//! Widget definitions.
//!
//! A [`Widget`] is the fixed part of a line: it says *how* to show a value,
//! never *what* the value is. Definitions are plain data, built with `const`
//! constructors, and are usually `static`:
//!
//! ```
//! use tickline_widgets::widget::{Composite, ProgressBar, Widget};
//! use tickline_widgets::format::PercentFormat;
//!
//! static EDGE: Widget = Widget::Label(">");
//! static PARTS: [Widget; 3] = [
//!     Widget::Label("copy "),
//!     Widget::ProgressBar(ProgressBar::auto("[", "]", "=", " ", &EDGE)),
//!     Widget::ProgressPercent(PercentFormat::new().width(7).precision(1)),
//! ];
//! static LINE: Widget = Widget::Composite(Composite::new(&PARTS));
//! assert!(LINE.is_auto());
//! ```

use crate::format::{NumberFormat, PercentFormat};

/// One node of a line definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widget<'a> {
    /// Constant text.
    Label(&'a str),
    /// The paired `Str` value, clipped and padded.
    String(StringField<'a>),
    /// The paired numeric value.
    Scalar(NumberFormat),
    /// Time-driven flipbook. Takes no value.
    Spinner(Spinner<'a>),
    /// Line progress as a percentage.
    ProgressPercent(PercentFormat),
    /// The line's current progress value.
    ProgressScalar(NumberFormat),
    /// `current/max` of the line's progress.
    ProgressFraction(NumberFormat),
    /// Text chosen by progress threshold.
    ProgressLabel(ProgressLabel<'a>),
    ProgressBar(ProgressBar<'a>),
    PingPongBar(PingPongBar<'a>),
    Composite(Composite<'a>),
}

impl<'a> Widget<'a> {
    /// Whether this widget takes its width from the space left on its line.
    ///
    /// True for bars without a field width and for unbounded composites that
    /// contain such a bar.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        match self {
            Self::ProgressBar(bar) => bar.field_width.is_none(),
            Self::PingPongBar(bar) => bar.field_width.is_none(),
            Self::Composite(c) => c.max_len.is_none() && c.widgets.iter().any(Widget::is_auto),
            _ => false,
        }
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Label(_) => "label",
            Self::String(_) => "string",
            Self::Scalar(_) => "scalar",
            Self::Spinner(_) => "spinner",
            Self::ProgressPercent(_) => "progress_percent",
            Self::ProgressScalar(_) => "progress_scalar",
            Self::ProgressFraction(_) => "progress_fraction",
            Self::ProgressLabel(_) => "progress_label",
            Self::ProgressBar(_) => "progress_bar",
            Self::PingPongBar(_) => "ping_pong_bar",
            Self::Composite(_) => "composite",
        }
    }
}

// ============================================================================
// String
// ============================================================================

/// Display settings for a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringField<'a> {
    /// Minimum columns; shorter output is left-padded.
    pub field_width: Option<u16>,
    /// Maximum columns; longer strings are clipped.
    pub max_len: Option<u16>,
    /// Shown in place of the clipped part, inside `max_len`.
    pub trim_marker: Option<&'a str>,
    /// Clip from the start instead of the end.
    pub trim_left: bool,
}

impl<'a> StringField<'a> {
    pub const NATURAL: Self = Self::new();

    #[must_use]
    pub const fn new() -> Self {
        Self {
            field_width: None,
            max_len: None,
            trim_marker: None,
            trim_left: false,
        }
    }

    #[must_use]
    pub const fn width(mut self, field_width: u16) -> Self {
        self.field_width = Some(field_width);
        self
    }

    #[must_use]
    pub const fn max_len(mut self, max_len: u16) -> Self {
        self.max_len = Some(max_len);
        self
    }

    #[must_use]
    pub const fn trim_marker(mut self, marker: &'a str) -> Self {
        self.trim_marker = Some(marker);
        self
    }

    #[must_use]
    pub const fn trim_left(mut self) -> Self {
        self.trim_left = true;
        self
    }
}

// ============================================================================
// Spinner
// ============================================================================

/// Animation frame sets.
pub mod frames {
    /// ASCII line spinner.
    pub const LINE: &[&str] = &["|", "/", "-", "\\"];
    /// Braille dot spinner.
    pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    /// Rotating braille block.
    pub const BRAILLE: &[&str] = &["⡿", "⣟", "⣯", "⣷", "⣾", "⣽", "⣻", "⢿"];
    /// Growing vertical bar.
    pub const BARS: &[&str] = &[" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];
    /// Moon phases (two columns each).
    pub const MOON: &[&str] = &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];
}

/// A flipbook advanced by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spinner<'a> {
    pub frames: &'a [&'a str],
    /// Milliseconds per frame. Zero holds the first frame.
    pub speed_ms: u16,
}

impl<'a> Spinner<'a> {
    #[must_use]
    pub const fn new(frames: &'a [&'a str], speed_ms: u16) -> Self {
        Self { frames, speed_ms }
    }

    /// Frame shown after `elapsed_ms`, or `None` if there are no frames.
    #[must_use]
    pub fn frame_at(&self, elapsed_ms: u64) -> Option<&'a str> {
        if self.frames.is_empty() {
            return None;
        }
        let step = match self.speed_ms {
            0 => 0,
            speed => elapsed_ms / u64::from(speed),
        };
        // The remainder is below frames.len(), so the cast cannot truncate.
        let idx = (step % self.frames.len() as u64) as usize;
        self.frames.get(idx).copied()
    }
}

// ============================================================================
// Progress label
// ============================================================================

/// One entry of a [`ProgressLabel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStep<'a> {
    /// Exclusive upper bound on the progress fraction.
    pub threshold: f32,
    pub text: &'a str,
}

impl<'a> LabelStep<'a> {
    #[must_use]
    pub const fn new(threshold: f32, text: &'a str) -> Self {
        Self { threshold, text }
    }
}

/// Text picked from an ordered threshold list.
///
/// The first step whose threshold exceeds the fraction wins, so a final
/// step above `1.0` covers completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressLabel<'a> {
    pub field_width: Option<u16>,
    pub steps: &'a [LabelStep<'a>],
}

impl<'a> ProgressLabel<'a> {
    #[must_use]
    pub const fn new(steps: &'a [LabelStep<'a>]) -> Self {
        Self {
            field_width: None,
            steps,
        }
    }

    #[must_use]
    pub const fn width(mut self, field_width: u16) -> Self {
        self.field_width = Some(field_width);
        self
    }

    /// Text for `fraction`, if any step covers it.
    #[must_use]
    pub fn select(&self, fraction: f32) -> Option<&'a str> {
        self.steps
            .iter()
            .find(|step| fraction < step.threshold)
            .map(|step| step.text)
    }
}

// ============================================================================
// Bars
// ============================================================================

/// A bar filled from the left in proportion to line progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar<'a> {
    /// Columns between the end caps. `None` takes the rest of the line.
    pub field_width: Option<u16>,
    pub left_end: &'a str,
    pub right_end: &'a str,
    /// Glyph repeated over the completed part.
    pub full_fill: &'a str,
    /// Glyph repeated over the remaining part.
    pub empty_fill: &'a str,
    /// Widget drawn at the boundary, with the bar's value.
    pub edge_fill: &'a Widget<'a>,
    /// Draw the edge with its own progress: how far the boundary has
    /// travelled across the edge's columns.
    pub scale_fill: bool,
}

impl<'a> ProgressBar<'a> {
    /// A bar that takes the rest of its line.
    #[must_use]
    pub const fn auto(
        left_end: &'a str,
        right_end: &'a str,
        full_fill: &'a str,
        empty_fill: &'a str,
        edge_fill: &'a Widget<'a>,
    ) -> Self {
        Self {
            field_width: None,
            left_end,
            right_end,
            full_fill,
            empty_fill,
            edge_fill,
            scale_fill: false,
        }
    }

    #[must_use]
    pub const fn width(mut self, field_width: u16) -> Self {
        self.field_width = Some(field_width);
        self
    }

    #[must_use]
    pub const fn scale_fill(mut self) -> Self {
        self.scale_fill = true;
        self
    }
}

/// A bar with a widget bouncing between its ends over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PingPongBar<'a> {
    /// Columns between the end caps. `None` takes the rest of the line.
    pub field_width: Option<u16>,
    pub left_end: &'a str,
    pub right_end: &'a str,
    /// Widget that travels, drawn with the bar's value.
    pub bouncer: &'a Widget<'a>,
    /// Background glyph.
    pub fill: &'a str,
    /// Milliseconds per column of travel. Zero holds the bouncer at the left.
    pub speed_ms: u16,
}

impl<'a> PingPongBar<'a> {
    /// A ping-pong bar that takes the rest of its line.
    #[must_use]
    pub const fn auto(
        left_end: &'a str,
        right_end: &'a str,
        bouncer: &'a Widget<'a>,
        fill: &'a str,
        speed_ms: u16,
    ) -> Self {
        Self {
            field_width: None,
            left_end,
            right_end,
            bouncer,
            fill,
            speed_ms,
        }
    }

    #[must_use]
    pub const fn width(mut self, field_width: u16) -> Self {
        self.field_width = Some(field_width);
        self
    }

    /// Left offset of a bouncer `bouncer_w` wide in a bar `bar_w` wide.
    ///
    /// The bouncer moves one column per `speed_ms` and reverses at each end.
    #[must_use]
    pub fn offset(&self, bar_w: usize, bouncer_w: usize, elapsed_ms: u64) -> usize {
        let travel = bar_w.saturating_sub(bouncer_w) as u64;
        if travel == 0 || self.speed_ms == 0 {
            return 0;
        }
        let phase = (elapsed_ms / u64::from(self.speed_ms)) % (2 * travel);
        let pos = if phase <= travel { phase } else { 2 * travel - phase };
        // pos <= travel, which came from a usize.
        pos as usize
    }
}

// ============================================================================
// Composite
// ============================================================================

/// An ordered group of widgets paired with a composite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composite<'a> {
    pub widgets: &'a [Widget<'a>],
    /// Bound on the group's columns. A bounded group lays out its own
    /// children, auto bars included, and drops children that do not fit.
    pub max_len: Option<u16>,
}

impl<'a> Composite<'a> {
    #[must_use]
    pub const fn new(widgets: &'a [Widget<'a>]) -> Self {
        Self {
            widgets,
            max_len: None,
        }
    }

    #[must_use]
    pub const fn max_len(mut self, max_len: u16) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static EDGE: Widget = Widget::Label(">");

    #[test]
    fn auto_detection() {
        let fixed = Widget::ProgressBar(ProgressBar::auto("[", "]", "=", " ", &EDGE).width(10));
        let auto = Widget::ProgressBar(ProgressBar::auto("[", "]", "=", " ", &EDGE));
        assert!(!fixed.is_auto());
        assert!(auto.is_auto());

        let children = [Widget::Label("x"), auto];
        assert!(Widget::Composite(Composite::new(&children)).is_auto());
        assert!(!Widget::Composite(Composite::new(&children).max_len(20)).is_auto());
        assert!(!Widget::Label("x").is_auto());
    }

    #[test]
    fn spinner_frames_follow_time() {
        let s = Spinner::new(frames::LINE, 100);
        assert_eq!(s.frame_at(0), Some("|"));
        assert_eq!(s.frame_at(99), Some("|"));
        assert_eq!(s.frame_at(100), Some("/"));
        assert_eq!(s.frame_at(450), Some("|"));
        assert_eq!(Spinner::new(frames::LINE, 0).frame_at(12_345), Some("|"));
        assert_eq!(Spinner::new(&[], 10).frame_at(0), None);
    }

    #[test]
    fn progress_label_thresholds_are_exclusive() {
        let steps = [
            LabelStep::new(0.5, "low"),
            LabelStep::new(1.0, "high"),
            LabelStep::new(2.0, "done"),
        ];
        let label = ProgressLabel::new(&steps);
        assert_eq!(label.select(0.0), Some("low"));
        assert_eq!(label.select(0.5), Some("high"));
        assert_eq!(label.select(1.0), Some("done"));
        assert_eq!(ProgressLabel::new(&steps[..1]).select(0.9), None);
    }

    #[test]
    fn ping_pong_offset_bounces() {
        let bar = PingPongBar::auto("[", "]", &EDGE, " ", 10);
        // bar 5, bouncer 1: travel 4, period 8
        let at = |ms| bar.offset(5, 1, ms);
        assert_eq!(at(0), 0);
        assert_eq!(at(10), 1);
        assert_eq!(at(40), 4);
        assert_eq!(at(50), 3);
        assert_eq!(at(80), 0);
        assert_eq!(bar.offset(1, 1, 1000), 0);
        assert_eq!(bar.offset(3, 5, 1000), 0);
    }
}
