#![forbid(unsafe_code)]

//! Frame controller.
//!
//! A frame is one `begin`, one or more `draw_line`, and one `end`. The
//! context remembers how many lines the previous frame left on screen so
//! the next frame can move back over them and overwrite them in place:
//!
//! ```text
//! begin    hide cursor, auto-wrap off, CR, up (previous lines - 1)
//! line 1   <text> [erase to end of line]
//! line n   LF <text> [erase to end of line]
//! end      shrank: LF + erase to end of screen
//!          done:   LF + auto-wrap on + show cursor
//!          flush
//! ```
//!
//! Drawing is synchronous and the context is not shared: one owner drives
//! one output stream.

use tickline_core::{Error, Result, debug, debug_span, trace};
use tickline_render::Sink;
use tickline_render::ansi::{
    ERASE_TO_LINE_END, FRAME_FINALE, FRAME_PREAMBLE, LINE_SEPARATOR, SHRINK_CLEAR,
    cursor_prev_line,
};
use tickline_widgets::layout::{self, DrawEnv};
use tickline_widgets::{Progress, Value, Widget};

/// Where a [`FrameContext`] is in the frame protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramePhase {
    /// Between frames. Only `begin` is accepted.
    #[default]
    Idle,
    /// Inside a frame. `draw_line` and `end` are accepted.
    Drawing,
}

/// Per-stream frame state.
#[derive(Debug)]
pub struct FrameContext<S: Sink> {
    sink: S,
    width: u16,
    previous_lines: u16,
    current_lines: u16,
    elapsed_ms: u64,
    dt_ms: u32,
    phase: FramePhase,
}

impl<S: Sink> FrameContext<S> {
    /// A context that has drawn nothing yet.
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            width: 0,
            previous_lines: 0,
            current_lines: 0,
            elapsed_ms: 0,
            dt_ms: 0,
            phase: FramePhase::Idle,
        }
    }

    /// Start a frame `width` columns wide, `dt_ms` after the previous one.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArguments`] if a frame is already open, or
    /// [`Error::Sink`].
    pub fn begin(&mut self, width: u16, dt_ms: u32) -> Result<()> {
        if self.phase == FramePhase::Drawing {
            return Err(Error::InvalidArguments("begin called inside an open frame"));
        }
        self.width = width;
        self.dt_ms = dt_ms;

        self.sink.print(FRAME_PREAMBLE)?;
        if self.current_lines > 1 {
            self.sink.print(cursor_prev_line(self.current_lines - 1).as_str())?;
        }

        self.previous_lines = self.current_lines;
        self.current_lines = 0;
        self.phase = FramePhase::Drawing;
        trace!(previous_lines = self.previous_lines, width, dt_ms, "frame begin");
        Ok(())
    }

    /// Draw one line: `widget` paired with `value`, with optional progress.
    ///
    /// Everything that can be checked up front (the progress pair, value
    /// shapes and types, widths) is checked before any output. A sink
    /// failure partway leaves a partial line on screen.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArguments`] outside a frame or for a bad progress
    /// pair, otherwise whatever [`layout::validate`] or the sink reports.
    pub fn draw_line(
        &mut self,
        current: Option<Value<'_>>,
        max: Option<Value<'_>>,
        widget: &Widget<'_>,
        value: Value<'_>,
    ) -> Result<()> {
        if self.phase != FramePhase::Drawing {
            return Err(Error::InvalidArguments("draw_line called outside a frame"));
        }
        let _span = debug_span!("draw_line", line = self.current_lines, width = self.width)
            .entered();
        let result = self.draw_line_inner(current, max, widget, value);
        if let Err(err) = &result {
            debug!(kind = err.kind_name(), widget = widget.kind_name(), "line failed");
        }
        result
    }

    fn draw_line_inner(
        &mut self,
        current: Option<Value<'_>>,
        max: Option<Value<'_>>,
        widget: &Widget<'_>,
        value: Value<'_>,
    ) -> Result<()> {
        let progress = Progress::from_pair(current, max)?;
        let env = DrawEnv::new(usize::from(self.width), self.elapsed_ms, progress);
        layout::validate(widget, value, &env)?;

        if self.current_lines > 0 {
            self.sink.print(LINE_SEPARATOR)?;
        }
        let cols = layout::emit(&mut self.sink, widget, value, &env)?;
        if cols < usize::from(self.width) {
            self.sink.print(ERASE_TO_LINE_END)?;
        }
        self.current_lines = self.current_lines.saturating_add(1);
        trace!(cols, "line drawn");
        Ok(())
    }

    /// Close the frame and flush the sink.
    ///
    /// With `done`, the display is finalized: the cursor moves below the
    /// last line and is shown again, and the next frame starts fresh. A
    /// frame with fewer lines than the previous one clears what is left
    /// below it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArguments`] outside a frame, or [`Error::Sink`].
    pub fn end(&mut self, done: bool) -> Result<()> {
        if self.phase != FramePhase::Drawing {
            return Err(Error::InvalidArguments("end called outside a frame"));
        }
        self.phase = FramePhase::Idle;
        self.elapsed_ms += u64::from(self.dt_ms);
        self.dt_ms = 0;

        if done {
            self.sink.print(FRAME_FINALE)?;
            self.previous_lines = 0;
            self.current_lines = 0;
        } else if self.current_lines < self.previous_lines {
            self.sink.print(SHRINK_CLEAR)?;
            self.current_lines += 1;
        }
        self.sink.flush()?;
        trace!(lines = self.current_lines, done, elapsed_ms = self.elapsed_ms, "frame end");
        Ok(())
    }

    /// Terminal width of the current (or last) frame.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Lines drawn so far in the current frame, or in the last one once it
    /// has ended.
    #[inline]
    #[must_use]
    pub const fn lines_drawn(&self) -> u16 {
        self.current_lines
    }

    /// Lines the frame before the current one left on screen.
    #[inline]
    #[must_use]
    pub const fn previous_lines(&self) -> u16 {
        self.previous_lines
    }

    /// Total time advanced by completed frames.
    #[inline]
    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> FramePhase {
        self.phase
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickline_render::CaptureSink;
    use tickline_widgets::widget::{Composite, ProgressBar};

    static LABEL: Widget = Widget::Label("hi");

    fn ctx() -> FrameContext<CaptureSink> {
        FrameContext::new(CaptureSink::new())
    }

    fn frame(ctx: &mut FrameContext<CaptureSink>, width: u16, lines: usize, done: bool) -> String {
        ctx.begin(width, 10).unwrap();
        for _ in 0..lines {
            ctx.draw_line(None, None, &LABEL, Value::Null).unwrap();
        }
        ctx.end(done).unwrap();
        ctx.sink_mut().take()
    }

    #[test]
    fn first_frame_bytes() {
        let mut c = ctx();
        let out = frame(&mut c, 10, 2, false);
        assert_eq!(out, "\x1b[?25l\x1b[?7l\rhi\x1b[0K\nhi\x1b[0K");
        assert_eq!(c.lines_drawn(), 2);
        assert_eq!(c.sink().flushes, 1);
    }

    #[test]
    fn second_frame_moves_up() {
        let mut c = ctx();
        frame(&mut c, 10, 3, false);
        let out = frame(&mut c, 10, 3, false);
        assert!(out.starts_with("\x1b[?25l\x1b[?7l\r\x1b[2F"));
        assert_eq!(c.previous_lines(), 3);
    }

    #[test]
    fn single_line_frames_never_move_up() {
        let mut c = ctx();
        frame(&mut c, 10, 1, false);
        let out = frame(&mut c, 10, 1, false);
        assert_eq!(out, "\x1b[?25l\x1b[?7l\rhi\x1b[0K");
    }

    #[test]
    fn shrinking_frame_clears_below() {
        let mut c = ctx();
        frame(&mut c, 10, 5, false);
        let out = frame(&mut c, 10, 2, false);
        assert!(out.ends_with("hi\x1b[0K\n\x1b[0J"));
        assert_eq!(out.matches("\x1b[0J").count(), 1);
        assert_eq!(c.lines_drawn(), 3);

        let next = frame(&mut c, 10, 2, false);
        assert!(next.starts_with("\x1b[?25l\x1b[?7l\r\x1b[2F"));
    }

    #[test]
    fn full_width_lines_skip_erase() {
        let mut c = ctx();
        let out = frame(&mut c, 2, 1, false);
        assert_eq!(out, "\x1b[?25l\x1b[?7l\rhi");
    }

    #[test]
    fn done_finalizes_and_resets() {
        let mut c = ctx();
        frame(&mut c, 10, 3, false);
        let out = frame(&mut c, 10, 3, true);
        assert!(out.ends_with("hi\x1b[0K\n\x1b[?7h\x1b[?25h"));
        assert_eq!(c.lines_drawn(), 0);
        assert_eq!(c.previous_lines(), 0);

        let fresh = frame(&mut c, 10, 1, false);
        assert_eq!(fresh, "\x1b[?25l\x1b[?7l\rhi\x1b[0K");
    }

    #[test]
    fn elapsed_time_advances_at_end() {
        let mut c = ctx();
        c.begin(10, 250).unwrap();
        assert_eq!(c.elapsed_ms(), 0);
        c.end(false).unwrap();
        assert_eq!(c.elapsed_ms(), 250);
        c.begin(10, 0).unwrap();
        c.end(false).unwrap();
        assert_eq!(c.elapsed_ms(), 250);
    }

    #[test]
    fn calls_out_of_phase_are_rejected() {
        let mut c = ctx();
        assert!(matches!(c.end(false), Err(Error::InvalidArguments(_))));
        assert!(matches!(
            c.draw_line(None, None, &LABEL, Value::Null),
            Err(Error::InvalidArguments(_))
        ));
        c.begin(10, 0).unwrap();
        assert!(matches!(c.begin(10, 0), Err(Error::InvalidArguments(_))));
        assert_eq!(c.phase(), FramePhase::Drawing);
        c.end(false).unwrap();
        assert_eq!(c.phase(), FramePhase::Idle);
    }

    #[test]
    fn bad_progress_pair_emits_nothing() {
        let mut c = ctx();
        c.begin(10, 0).unwrap();
        c.draw_line(None, None, &LABEL, Value::Null).unwrap();
        c.sink_mut().take();
        let err = c.draw_line(Some(Value::Int(1)), None, &LABEL, Value::Null);
        assert!(matches!(err, Err(Error::InvalidArguments(_))));
        assert!(c.sink().output.is_empty());
        assert_eq!(c.lines_drawn(), 1);
    }

    #[test]
    fn ambiguous_line_emits_nothing() {
        static EDGE: Widget = Widget::Label(">");
        static PARTS: [Widget; 2] = [
            Widget::ProgressBar(ProgressBar::auto("[", "]", "#", " ", &EDGE)),
            Widget::ProgressBar(ProgressBar::auto("[", "]", "#", " ", &EDGE)),
        ];
        static LINE: Widget = Widget::Composite(Composite::new(&PARTS));
        let values = [Value::Null; 2];

        let mut c = ctx();
        c.begin(40, 0).unwrap();
        c.draw_line(None, None, &LABEL, Value::Null).unwrap();
        c.sink_mut().take();
        let err = c.draw_line(
            Some(Value::Int(1)),
            Some(Value::Int(2)),
            &LINE,
            Value::Composite(&values),
        );
        assert_eq!(err, Err(Error::AmbiguousWidth));
        assert!(c.sink().output.is_empty());
    }

    #[test]
    fn progress_drives_bars() {
        static EDGE: Widget = Widget::Label(">");
        static BAR: Widget =
            Widget::ProgressBar(ProgressBar::auto("[", "]", "=", " ", &EDGE).width(10));
        let mut c = ctx();
        c.begin(80, 0).unwrap();
        c.draw_line(Some(Value::Int(5)), Some(Value::Int(10)), &BAR, Value::Null)
            .unwrap();
        c.end(false).unwrap();
        assert!(c.sink().output.contains("[=====>    ]\x1b[0K"));
    }
}
