#![forbid(unsafe_code)]

//! Retained-mode line registry.
//!
//! A [`LineSet`] owns the list of lines currently on display, so callers
//! add and remove lines as work starts and finishes and supply only fresh
//! values each tick. Drawing forwards to a [`FrameContext`] as one frame.

use tickline_core::{Error, Result, trace};
use tickline_render::Sink;
use tickline_widgets::{Value, Widget};

use crate::frame::FrameContext;

/// Handle to a line in a [`LineSet`]. Never reused within one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u32);

impl LineId {
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Inputs for one line of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineValues<'v> {
    pub current: Option<Value<'v>>,
    pub max: Option<Value<'v>>,
    pub value: Value<'v>,
}

impl<'v> LineValues<'v> {
    /// A line without progress.
    #[must_use]
    pub const fn new(value: Value<'v>) -> Self {
        Self {
            current: None,
            max: None,
            value,
        }
    }

    /// A line with a progress pair.
    #[must_use]
    pub const fn with_progress(value: Value<'v>, current: Value<'v>, max: Value<'v>) -> Self {
        Self {
            current: Some(current),
            max: Some(max),
            value,
        }
    }
}

/// Fixed-capacity, insertion-ordered set of line definitions.
#[derive(Debug, Clone)]
pub struct LineSet<'w> {
    lines: Vec<(LineId, &'w Widget<'w>)>,
    capacity: usize,
    next_id: u32,
}

impl<'w> LineSet<'w> {
    /// A set that holds at most `capacity` lines.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Append a line drawn with `widget`.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] when the set is full or has issued every id.
    pub fn add_line(&mut self, widget: &'w Widget<'w>) -> Result<LineId> {
        if self.lines.len() >= self.capacity {
            return Err(Error::Exhausted);
        }
        let id = LineId(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or(Error::Exhausted)?;
        self.lines.push((id, widget));
        trace!(id = id.0, lines = self.lines.len(), "line added");
        Ok(id)
    }

    /// Remove a line. Lines after it move up on the next frame.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArguments`] if `id` is not in the set.
    pub fn remove_line(&mut self, id: LineId) -> Result<()> {
        let pos = self
            .lines
            .iter()
            .position(|(line, _)| *line == id)
            .ok_or(Error::InvalidArguments("unknown line id"))?;
        self.lines.remove(pos);
        trace!(id = id.0, lines = self.lines.len(), "line removed");
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `id` is in the set.
    #[must_use]
    pub fn contains(&self, id: LineId) -> bool {
        self.lines.iter().any(|(line, _)| *line == id)
    }

    /// Line ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = LineId> + '_ {
        self.lines.iter().map(|(id, _)| *id)
    }

    /// Draw every line as one frame.
    ///
    /// `values` is asked for each line's inputs in display order. The frame
    /// is always closed, even when a line fails; the first error is returned.
    ///
    /// # Errors
    ///
    /// The first error from [`FrameContext`].
    pub fn draw<'v, S, F>(
        &self,
        ctx: &mut FrameContext<S>,
        width: u16,
        dt_ms: u32,
        done: bool,
        mut values: F,
    ) -> Result<()>
    where
        S: Sink,
        F: FnMut(LineId) -> LineValues<'v>,
    {
        ctx.begin(width, dt_ms)?;
        let drawn = self.lines.iter().try_for_each(|(id, widget)| {
            let line = values(*id);
            ctx.draw_line(line.current, line.max, widget, line.value)
        });
        let ended = ctx.end(done);
        drawn.and(ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickline_render::CaptureSink;

    static A: Widget = Widget::Label("a");
    static B: Widget = Widget::Label("b");

    #[test]
    fn capacity_is_enforced() {
        let mut set = LineSet::with_capacity(2);
        set.add_line(&A).unwrap();
        set.add_line(&B).unwrap();
        assert_eq!(set.add_line(&A), Err(Error::Exhausted));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let mut set = LineSet::with_capacity(0);
        assert_eq!(set.add_line(&A), Err(Error::Exhausted));
        assert!(set.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut set = LineSet::with_capacity(1);
        let first = set.add_line(&A).unwrap();
        set.remove_line(first).unwrap();
        let second = set.add_line(&A).unwrap();
        assert_ne!(first, second);
        assert!(!set.contains(first));
        assert!(set.contains(second));
    }

    #[test]
    fn unknown_ids_are_invalid() {
        let mut set = LineSet::with_capacity(2);
        let id = set.add_line(&A).unwrap();
        set.remove_line(id).unwrap();
        assert!(matches!(set.remove_line(id), Err(Error::InvalidArguments(_))));
    }

    #[test]
    fn draws_in_insertion_order() {
        let mut set = LineSet::with_capacity(4);
        let a = set.add_line(&A).unwrap();
        set.add_line(&B).unwrap();
        set.add_line(&A).unwrap();
        set.remove_line(a).unwrap();

        let mut ctx = FrameContext::new(CaptureSink::new());
        set.draw(&mut ctx, 1, 0, false, |_| LineValues::default())
            .unwrap();
        assert_eq!(ctx.sink().output, "\x1b[?25l\x1b[?7l\rb\na");
        assert_eq!(ctx.lines_drawn(), 2);
        assert_eq!(set.ids().count(), 2);
    }

    #[test]
    fn failed_line_still_closes_frame() {
        static SCALAR: Widget = Widget::Scalar(tickline_widgets::NumberFormat::PLAIN);
        let mut set = LineSet::with_capacity(2);
        set.add_line(&SCALAR).unwrap();

        let mut ctx = FrameContext::new(CaptureSink::new());
        let err = set.draw(&mut ctx, 10, 0, false, |_| LineValues::new(Value::Str("x")));
        assert_eq!(err, Err(Error::WrongValueType));
        assert_eq!(ctx.sink().flushes, 1);
        assert!(ctx.begin(10, 0).is_ok());
    }
}
