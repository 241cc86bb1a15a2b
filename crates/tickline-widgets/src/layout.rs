#![forbid(unsafe_code)]

//! Line layout and drawing.
//!
//! Output is append-only, so every width on a line has to be settled before
//! the first byte of the widget that depends on it goes out. Drawing is done
//! in three steps:
//!
//! 1. [`validate`] walks the whole tree: value shapes and types, progress
//!    requirements, undisplayable text, and the auto-width rule (at most one
//!    auto-width widget per layout scope). Nothing is written if it fails.
//! 2. When a widget takes its width from the line, the widths of everything
//!    to its right are measured with [`natural_width`].
//! 3. The tree is emitted left to right through the [`Sink`].
//!
//! Measuring and emitting are the same walk pointed at different outputs,
//! so a measured width is exactly what gets drawn.
//!
//! # Scopes
//!
//! A line is one scope, as wide as the terminal. An unbounded composite
//! shares its parent's scope; a composite with `max_len` opens a new scope
//! of that many columns.

use tickline_core::{Error, Result, trace};
use tickline_render::Sink;
use tickline_text::display_width;

use crate::format::{self, Fraction, Percent, Render, Scalar};
use crate::progress::{Progress, clamp_unit};
use crate::string::fit;
use crate::value::Value;
use crate::widget::{Composite, PingPongBar, ProgressBar, Widget};

/// Per-line drawing inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawEnv<'a> {
    /// Columns available to the line.
    pub width: usize,
    /// Time driving spinners and ping-pong bars.
    pub elapsed_ms: u64,
    pub progress: Progress<'a>,
}

impl<'a> DrawEnv<'a> {
    #[must_use]
    pub const fn new(width: usize, elapsed_ms: u64, progress: Progress<'a>) -> Self {
        Self {
            width,
            elapsed_ms,
            progress,
        }
    }

    #[must_use]
    fn with_progress(self, progress: Progress<'a>) -> Self {
        Self { progress, ..self }
    }
}

// ============================================================================
// Public entry points
// ============================================================================

/// Check `widget` against `value` without drawing anything.
///
/// # Errors
///
/// - [`Error::InvalidArguments`]: a composite value does not mirror its
///   widget, or a spinner has no frames.
/// - [`Error::WrongValueType`]: a value has the wrong kind for its widget,
///   or a progress readout is drawn on a line without progress.
/// - [`Error::AmbiguousWidth`]: two auto-width widgets share a scope, an
///   edge or bouncer is auto-width, or some text has control characters.
pub fn validate(widget: &Widget<'_>, value: Value<'_>, env: &DrawEnv<'_>) -> Result<()> {
    check(widget, value, env)?;
    if auto_participants(widget) > 1 {
        return Err(Error::AmbiguousWidth);
    }
    Ok(())
}

/// Columns `widget` occupies when drawn with `value`.
///
/// # Errors
///
/// [`Error::AmbiguousWidth`] for an auto-width widget, whose width depends
/// on its neighbours; otherwise whatever drawing it would report.
pub fn natural_width(widget: &Widget<'_>, value: Value<'_>, env: &DrawEnv<'_>) -> Result<usize> {
    if widget.is_auto() {
        return Err(Error::AmbiguousWidth);
    }
    node(&mut Measure, widget, value, env, Scope::root(env.width), 0)
}

/// Validate, then draw `widget` as one line. Returns the columns emitted.
///
/// # Errors
///
/// Everything [`validate`] reports, before any output, plus
/// [`Error::Sink`] if the sink fails partway.
pub fn draw<S: Sink + ?Sized>(
    sink: &mut S,
    widget: &Widget<'_>,
    value: Value<'_>,
    env: &DrawEnv<'_>,
) -> Result<usize> {
    validate(widget, value, env)?;
    emit(sink, widget, value, env)
}

/// Draw `widget` without validating it first.
///
/// For callers that already ran [`validate`] with the same inputs. Without
/// it an invalid tree still fails, but possibly after partial output.
///
/// # Errors
///
/// The first problem met while drawing, or [`Error::Sink`].
pub fn emit<S: Sink + ?Sized>(
    sink: &mut S,
    widget: &Widget<'_>,
    value: Value<'_>,
    env: &DrawEnv<'_>,
) -> Result<usize> {
    node(&mut Emit(sink), widget, value, env, Scope::root(env.width), 0)
}

// ============================================================================
// Validation
// ============================================================================

fn text_width(text: &str) -> Result<usize> {
    display_width(text).ok_or(Error::AmbiguousWidth)
}

/// Auto-width widgets competing in the scope `widget` sits in.
fn auto_participants(widget: &Widget<'_>) -> usize {
    match widget {
        Widget::ProgressBar(bar) => usize::from(bar.field_width.is_none()),
        Widget::PingPongBar(bar) => usize::from(bar.field_width.is_none()),
        Widget::Composite(Composite {
            widgets,
            max_len: None,
        }) => widgets.iter().map(auto_participants).sum(),
        _ => 0,
    }
}

fn composite_values<'v>(c: &Composite<'_>, value: Value<'v>) -> Result<&'v [Value<'v>]> {
    match value {
        Value::Composite(values) if values.len() == c.widgets.len() => Ok(values),
        _ => Err(Error::InvalidArguments(
            "composite value does not match its widget",
        )),
    }
}

/// Env an edge widget is drawn with.
fn edge_env<'a>(bar: &ProgressBar<'_>, env: &DrawEnv<'a>, edge_progress: f32) -> DrawEnv<'a> {
    if bar.scale_fill {
        env.with_progress(Progress::unit(edge_progress))
    } else {
        *env
    }
}

fn check(widget: &Widget<'_>, value: Value<'_>, env: &DrawEnv<'_>) -> Result<()> {
    match widget {
        Widget::Label(text) => text_width(text).map(drop),
        Widget::String(field) => {
            if let Some(marker) = field.trim_marker {
                text_width(marker)?;
            }
            match value {
                Value::Str(s) => text_width(s).map(drop),
                Value::Null => Ok(()),
                _ => Err(Error::WrongValueType),
            }
        }
        Widget::Scalar(_) => {
            if value.is_numeric() {
                Ok(())
            } else {
                Err(Error::WrongValueType)
            }
        }
        Widget::Spinner(spinner) => {
            if spinner.frames.is_empty() {
                return Err(Error::InvalidArguments("spinner has no frames"));
            }
            spinner
                .frames
                .iter()
                .try_for_each(|frame| text_width(frame).map(drop))
        }
        Widget::ProgressPercent(_) => Ok(()),
        Widget::ProgressLabel(label) => label
            .steps
            .iter()
            .try_for_each(|step| text_width(step.text).map(drop)),
        Widget::ProgressScalar(_) | Widget::ProgressFraction(_) => {
            if env.progress.is_present() {
                Ok(())
            } else {
                Err(Error::WrongValueType)
            }
        }
        Widget::ProgressBar(bar) => {
            for text in [bar.left_end, bar.right_end, bar.full_fill, bar.empty_fill] {
                text_width(text)?;
            }
            if bar.edge_fill.is_auto() {
                return Err(Error::AmbiguousWidth);
            }
            check(bar.edge_fill, value, &edge_env(bar, env, 0.0))
        }
        Widget::PingPongBar(bar) => {
            for text in [bar.left_end, bar.right_end, bar.fill] {
                text_width(text)?;
            }
            if bar.bouncer.is_auto() {
                return Err(Error::AmbiguousWidth);
            }
            check(bar.bouncer, value, env)
        }
        Widget::Composite(c) => {
            let values = composite_values(c, value)?;
            for (child, v) in c.widgets.iter().zip(values) {
                check(child, *v, env)?;
            }
            if c.max_len.is_some() && c.widgets.iter().map(auto_participants).sum::<usize>() > 1
            {
                return Err(Error::AmbiguousWidth);
            }
            Ok(())
        }
    }
}

// ============================================================================
// Walk
// ============================================================================

/// Where a walk sends its text.
trait Out {
    fn text(&mut self, text: &str) -> Result<()>;
}

/// Drops everything; only the column counts matter.
struct Measure;

impl Out for Measure {
    #[inline]
    fn text(&mut self, _: &str) -> Result<()> {
        Ok(())
    }
}

struct Emit<'s, S: Sink + ?Sized>(&'s mut S);

impl<S: Sink + ?Sized> Out for Emit<'_, S> {
    #[inline]
    fn text(&mut self, text: &str) -> Result<()> {
        if !text.is_empty() {
            self.0.print(text)?;
        }
        Ok(())
    }
}

/// Layout bounds for one widget.
#[derive(Debug, Clone, Copy)]
struct Scope {
    /// Absolute column the scope ends at.
    limit: usize,
    /// Columns reserved for widgets after this one.
    trailing: usize,
}

impl Scope {
    const fn root(width: usize) -> Self {
        Self {
            limit: width,
            trailing: 0,
        }
    }
}

const SPACES: &str = "                                ";

fn pad<O: Out>(out: &mut O, mut cols: usize) -> Result<()> {
    while cols > 0 {
        let n = cols.min(SPACES.len());
        out.text(&SPACES[..n])?;
        cols -= n;
    }
    Ok(())
}

/// Paint `cols` columns with `glyph`, padding any remainder with spaces.
fn fill<O: Out>(out: &mut O, glyph: &str, cols: usize) -> Result<()> {
    let glyph_w = text_width(glyph)?;
    if glyph_w == 0 {
        return pad(out, cols);
    }
    for _ in 0..cols / glyph_w {
        out.text(glyph)?;
    }
    pad(out, cols % glyph_w)
}

/// Emit formatted text. Output past the buffer capacity is dropped, and
/// only the kept text counts towards the line's columns.
fn rendered<O: Out>(out: &mut O, r: &impl Render) -> Result<usize> {
    let (buf, _) = format::to_buf(r)?;
    let text = buf.as_str();
    out.text(text)?;
    text_width(text)
}

fn node<O: Out>(
    out: &mut O,
    widget: &Widget<'_>,
    value: Value<'_>,
    env: &DrawEnv<'_>,
    scope: Scope,
    cursor: usize,
) -> Result<usize> {
    match widget {
        Widget::Label(text) => {
            let cols = text_width(text)?;
            out.text(text)?;
            Ok(cols)
        }
        Widget::String(field) => {
            let text = match value {
                Value::Str(s) => Some(s),
                Value::Null => None,
                _ => return Err(Error::WrongValueType),
            };
            let fitted = fit(field, text)?;
            pad(out, fitted.pad)?;
            out.text(fitted.lead)?;
            out.text(fitted.body)?;
            out.text(fitted.tail)?;
            Ok(fitted.width)
        }
        Widget::Scalar(format) => rendered(out, &Scalar::new(*format, value)),
        Widget::Spinner(spinner) => {
            let frame = spinner
                .frame_at(env.elapsed_ms)
                .ok_or(Error::InvalidArguments("spinner has no frames"))?;
            let cols = text_width(frame)?;
            out.text(frame)?;
            Ok(cols)
        }
        Widget::ProgressPercent(format) => {
            rendered(out, &Percent::new(*format, env.progress.fraction()))
        }
        Widget::ProgressScalar(format) => {
            let current = env.progress.current().ok_or(Error::WrongValueType)?;
            rendered(out, &Scalar::new(*format, current))
        }
        Widget::ProgressFraction(format) => {
            let (Some(current), Some(max)) = (env.progress.current(), env.progress.max()) else {
                return Err(Error::WrongValueType);
            };
            rendered(out, &Fraction::new(*format, current, max))
        }
        Widget::ProgressLabel(label) => {
            let text = label.select(env.progress.fraction()).unwrap_or("");
            let cols = text_width(text)?;
            let padding = label.field_width.map_or(0, usize::from).saturating_sub(cols);
            pad(out, padding)?;
            out.text(text)?;
            Ok(padding + cols)
        }
        Widget::ProgressBar(bar) => progress_bar(out, bar, value, env, scope, cursor),
        Widget::PingPongBar(bar) => ping_pong_bar(out, bar, value, env, scope, cursor),
        Widget::Composite(c) => {
            let values = composite_values(c, value)?;
            match c.max_len {
                None => sequence(out, c.widgets, values, env, scope, cursor, false),
                Some(max) => {
                    let bounded = Scope {
                        limit: cursor + usize::from(max),
                        trailing: 0,
                    };
                    sequence(out, c.widgets, values, env, bounded, cursor, true)
                }
            }
        }
    }
}

/// Columns between a bar's end caps.
fn bar_width(field_width: Option<u16>, caps: usize, scope: Scope, cursor: usize) -> usize {
    match field_width {
        Some(w) => usize::from(w),
        None => scope.limit.saturating_sub(cursor + caps + scope.trailing),
    }
}

fn progress_bar<O: Out>(
    out: &mut O,
    bar: &ProgressBar<'_>,
    value: Value<'_>,
    env: &DrawEnv<'_>,
    scope: Scope,
    cursor: usize,
) -> Result<usize> {
    let left_w = text_width(bar.left_end)?;
    let right_w = text_width(bar.right_end)?;
    let bar_w = bar_width(bar.field_width, left_w + right_w, scope, cursor);

    let fraction = env.progress.fraction();
    let edge_w = natural_width(bar.edge_fill, value, env)?;
    let prog_w = ((bar_w as f32 * fraction) as usize).min(bar_w);
    let draw_edge = fraction > 0.0 && fraction < 1.0 && edge_w <= bar_w;
    let (full, empty) = if draw_edge {
        let offset = prog_w.saturating_sub(edge_w / 2).min(bar_w - edge_w);
        (offset, bar_w - offset - edge_w)
    } else {
        (prog_w, bar_w - prog_w)
    };
    trace!(bar_w, edge_w, full, empty, draw_edge, "progress bar layout");

    out.text(bar.left_end)?;
    fill(out, bar.full_fill, full)?;
    if draw_edge {
        let edge_progress = if edge_w == 0 {
            0.0
        } else {
            clamp_unit((fraction * bar_w as f32 - full as f32) / edge_w as f32)
        };
        let env = edge_env(bar, env, edge_progress);
        edge(out, bar, value, &env, edge_w)?;
    }
    fill(out, bar.empty_fill, empty)?;
    out.text(bar.right_end)?;
    Ok(left_w + bar_w + right_w)
}

/// Draw the edge in exactly `edge_w` columns.
///
/// A `scale_fill` edge is drawn at a different progress than it was
/// measured at, so its width can change: narrower output is padded, and
/// output that no longer fits is replaced by the full fill.
fn edge<O: Out>(
    out: &mut O,
    bar: &ProgressBar<'_>,
    value: Value<'_>,
    env: &DrawEnv<'_>,
    edge_w: usize,
) -> Result<()> {
    let scope = Scope::root(edge_w);
    let cols = node(&mut Measure, bar.edge_fill, value, env, scope, 0)?;
    if cols > edge_w {
        return fill(out, bar.full_fill, edge_w);
    }
    node(out, bar.edge_fill, value, env, scope, 0)?;
    pad(out, edge_w - cols)
}

fn ping_pong_bar<O: Out>(
    out: &mut O,
    bar: &PingPongBar<'_>,
    value: Value<'_>,
    env: &DrawEnv<'_>,
    scope: Scope,
    cursor: usize,
) -> Result<usize> {
    let left_w = text_width(bar.left_end)?;
    let right_w = text_width(bar.right_end)?;
    let bar_w = bar_width(bar.field_width, left_w + right_w, scope, cursor);
    let bouncer_w = natural_width(bar.bouncer, value, env)?;

    out.text(bar.left_end)?;
    if bouncer_w > bar_w {
        fill(out, bar.fill, bar_w)?;
    } else {
        let offset = bar.offset(bar_w, bouncer_w, env.elapsed_ms);
        trace!(bar_w, bouncer_w, offset, "ping-pong bar layout");
        fill(out, bar.fill, offset)?;
        node(out, bar.bouncer, value, env, Scope::root(bouncer_w), 0)?;
        fill(out, bar.fill, bar_w - offset - bouncer_w)?;
    }
    out.text(bar.right_end)?;
    Ok(left_w + bar_w + right_w)
}

/// Lay out children left to right from `start`.
///
/// An auto-width child gets the scope with everything to its right
/// reserved. In a bounded scope, the first child that would cross the
/// limit ends the sequence.
fn sequence<O: Out>(
    out: &mut O,
    widgets: &[Widget<'_>],
    values: &[Value<'_>],
    env: &DrawEnv<'_>,
    scope: Scope,
    start: usize,
    bounded: bool,
) -> Result<usize> {
    let mut cursor = start;
    for (i, (child, v)) in widgets.iter().zip(values).enumerate() {
        let child_scope = if child.is_auto() {
            let mut trailing = scope.trailing;
            for (w, v) in widgets[i + 1..].iter().zip(&values[i + 1..]) {
                trailing += natural_width(w, *v, env)?;
            }
            Scope {
                limit: scope.limit,
                trailing,
            }
        } else {
            scope
        };
        if bounded {
            let cols = node(&mut Measure, child, *v, env, child_scope, cursor)?;
            if cursor + cols > scope.limit {
                trace!(skipped = widgets.len() - i, "bounded composite overflow");
                break;
            }
        }
        cursor += node(out, child, *v, env, child_scope, cursor)?;
    }
    Ok(cursor - start)
}
