#![forbid(unsafe_code)]

//! Number formatting with units, field widths, and precision.
//!
//! Every piece of numeric text on a line is produced by a [`Render`]
//! implementation. [`measure`] and [`write`] drive the same `render` call,
//! one into a [`Discard`] writer and one into the caller's writer, so the
//! length a widget reports during layout is always the length it emits.
//!
//! Formatted text is plain ASCII: byte length and column width coincide.
//!
//! | Unit | Input | Output |
//! |------|-------|--------|
//! | `None` | `Int(42)` / `Double(4.5)` | `42` / `4.500000` |
//! | `Bytes` | `Int(2048)` | `2048B` |
//! | `Kilobytes` | `Int(2048)` | `2.000000KB` |
//! | `DynamicSize` | `Int(3 << 20)` | `3.000000MB` |
//! | `Seconds` | `Double(8424.9)` | `8424s` |
//! | `HmsLetters` | `Int(8424)` | `2h20m24s` |
//! | `HmsColons` | `Int(8424)` | `02:20:24` |

use std::fmt::{self, Write};

use tickline_core::{Error, Result};
use tickline_render::{CountingWriter, Discard, FixedBuf};

use crate::value::Value;

/// Digits after the decimal point when no precision is configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Stack buffer used for formatted numbers on the draw path.
pub type FormatBuf = FixedBuf<64>;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Unit a number is converted to and suffixed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    None,
    /// Whole bytes.
    Bytes,
    /// Bytes divided by 1024.
    Kilobytes,
    /// Bytes divided by 1024².
    Megabytes,
    /// Bytes divided by 1024³.
    Gigabytes,
    /// The largest of B/KB/MB/GB that keeps the value at or above one.
    DynamicSize,
    /// Whole seconds.
    Seconds,
    /// Whole seconds as `{h}h{m}m{s}s`.
    HmsLetters,
    /// Whole seconds as `HH:MM:SS`.
    HmsColons,
}

impl Unit {
    /// Text appended after the number. Empty for the H:M:S forms, which
    /// carry their own separators.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Bytes => "B",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Seconds => "s",
            Self::None | Self::DynamicSize | Self::HmsLetters | Self::HmsColons => "",
        }
    }
}

/// Unit, minimum width, and precision for one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFormat {
    pub unit: Unit,
    /// Minimum columns, suffix included. `None` means natural width.
    pub field_width: Option<u16>,
    /// Digits after the decimal point for floating-point output.
    pub precision: Option<u8>,
}

impl NumberFormat {
    /// Natural width, default precision, no unit.
    pub const PLAIN: Self = Self::new(Unit::None);

    #[must_use]
    pub const fn new(unit: Unit) -> Self {
        Self {
            unit,
            field_width: None,
            precision: None,
        }
    }

    #[must_use]
    pub const fn width(mut self, field_width: u16) -> Self {
        self.field_width = Some(field_width);
        self
    }

    #[must_use]
    pub const fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    fn natural(self) -> Self {
        Self {
            field_width: None,
            ..self
        }
    }

    fn precision_or_default(self) -> usize {
        self.precision.map_or(DEFAULT_PRECISION, usize::from)
    }

    fn width_or_zero(self) -> usize {
        self.field_width.map_or(0, usize::from)
    }
}

// ============================================================================
// Render contract
// ============================================================================

/// Something that formats into text.
pub trait Render {
    /// Format into `out`.
    ///
    /// # Errors
    ///
    /// [`Error::WrongValueType`] if the input cannot be formatted, or the
    /// writer's error mapped to [`Error::Sink`].
    fn render<W: Write>(&self, out: &mut W) -> Result<()>;
}

/// Length `r` would produce, without producing it.
///
/// # Errors
///
/// Whatever [`Render::render`] reports.
pub fn measure(r: &impl Render) -> Result<usize> {
    let mut counter = CountingWriter::new(Discard);
    r.render(&mut counter)?;
    Ok(counter.bytes_written())
}

/// Render into `out` and return the full length, even if `out` kept less.
///
/// # Errors
///
/// Whatever [`Render::render`] reports.
pub fn write<W: Write>(r: &impl Render, out: &mut W) -> Result<usize> {
    let mut counter = CountingWriter::new(out);
    r.render(&mut counter)?;
    Ok(counter.bytes_written())
}

/// Render into a fresh [`FormatBuf`], returning the buffer and full length.
///
/// # Errors
///
/// Whatever [`Render::render`] reports.
pub fn to_buf(r: &impl Render) -> Result<(FormatBuf, usize)> {
    let mut buf = FormatBuf::new();
    let len = write(r, &mut buf)?;
    Ok((buf, len))
}

// ============================================================================
// Numbers
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Double(f64),
}

/// Apply unit scaling, returning the number and the unit to suffix it with.
fn convert(unit: Unit, value: Value<'_>) -> Result<(Number, Unit)> {
    if !value.is_numeric() {
        return Err(Error::WrongValueType);
    }
    let as_int = || Number::Int(value.as_i64().unwrap_or_default());
    let scaled = |div: f64| Number::Double(value.as_f64().unwrap_or_default() / div);
    let converted = match unit {
        Unit::None => match value {
            Value::Int(i) => (Number::Int(i), unit),
            _ => (Number::Double(value.as_f64().unwrap_or_default()), unit),
        },
        Unit::Bytes | Unit::Seconds | Unit::HmsLetters | Unit::HmsColons => (as_int(), unit),
        Unit::Kilobytes => (scaled(KIB), unit),
        Unit::Megabytes => (scaled(MIB), unit),
        Unit::Gigabytes => (scaled(GIB), unit),
        Unit::DynamicSize => {
            let magnitude = value.as_f64().unwrap_or_default();
            if magnitude < KIB {
                (as_int(), Unit::Bytes)
            } else if magnitude < MIB {
                (scaled(KIB), Unit::Kilobytes)
            } else if magnitude < GIB {
                (scaled(MIB), Unit::Megabytes)
            } else {
                (scaled(GIB), Unit::Gigabytes)
            }
        }
    };
    Ok(converted)
}

struct Hms {
    hours: i64,
    minutes: i64,
    seconds: i64,
    colons: bool,
}

impl Hms {
    fn new(total: i64, colons: bool) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total / 60) % 60,
            seconds: total % 60,
            colons,
        }
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            hours: h,
            minutes: m,
            seconds: s,
            colons,
        } = *self;
        if colons {
            write!(f, "{h:02}:{m:02}:{s:02}")
        } else {
            write!(f, "{h}h{m}m{s}s")
        }
    }
}

fn pad<W: Write>(out: &mut W, cols: usize) -> fmt::Result {
    if cols > 0 {
        write!(out, "{:cols$}", "")?;
    }
    Ok(())
}

/// A number paired with its format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar<'a> {
    pub format: NumberFormat,
    pub value: Value<'a>,
}

impl<'a> Scalar<'a> {
    #[must_use]
    pub const fn new(format: NumberFormat, value: Value<'a>) -> Self {
        Self { format, value }
    }
}

impl Render for Scalar<'_> {
    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let (number, unit) = convert(self.format.unit, self.value)?;
        let field = self.format.width_or_zero();

        if matches!(unit, Unit::HmsLetters | Unit::HmsColons) {
            let total = match number {
                Number::Int(i) => i,
                Number::Double(d) => d as i64,
            };
            let hms = Hms::new(total, unit == Unit::HmsColons);
            let mut counter = CountingWriter::new(Discard);
            write!(counter, "{hms}")?;
            pad(out, field.saturating_sub(counter.bytes_written()))?;
            write!(out, "{hms}")?;
            return Ok(());
        }

        let suffix = unit.suffix();
        let width = field.saturating_sub(suffix.len());
        match number {
            Number::Int(i) => write!(out, "{i:>width$}{suffix}")?,
            Number::Double(d) => {
                let prec = self.format.precision_or_default();
                write!(out, "{d:>width$.prec$}{suffix}")?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Progress readouts
// ============================================================================

/// Field width and precision for a percentage readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PercentFormat {
    /// Minimum columns, `%` included.
    pub field_width: Option<u16>,
    pub precision: Option<u8>,
}

impl PercentFormat {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            field_width: None,
            precision: None,
        }
    }

    #[must_use]
    pub const fn width(mut self, field_width: u16) -> Self {
        self.field_width = Some(field_width);
        self
    }

    #[must_use]
    pub const fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }
}

/// A completion fraction rendered as a percentage with a trailing `%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent {
    pub format: PercentFormat,
    /// Completion in `[0, 1]`.
    pub fraction: f32,
}

impl Percent {
    #[must_use]
    pub const fn new(format: PercentFormat, fraction: f32) -> Self {
        Self { format, fraction }
    }
}

impl Render for Percent {
    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let pct = f64::from(self.fraction * 100.0);
        let width = self.format.field_width.map_or(0, usize::from).saturating_sub(1);
        let prec = self.format.precision.map_or(DEFAULT_PRECISION, usize::from);
        write!(out, "{pct:>width$.prec$}%")?;
        Ok(())
    }
}

/// `current/max`, each side formatted at natural width with the shared unit
/// and precision, the whole padded to the field width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fraction<'a> {
    pub format: NumberFormat,
    pub current: Value<'a>,
    pub max: Value<'a>,
}

impl<'a> Fraction<'a> {
    #[must_use]
    pub const fn new(format: NumberFormat, current: Value<'a>, max: Value<'a>) -> Self {
        Self {
            format,
            current,
            max,
        }
    }
}

impl Render for Fraction<'_> {
    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let side = self.format.natural();
        let current = Scalar::new(side, self.current);
        let max = Scalar::new(side, self.max);
        let len = measure(&current)? + 1 + measure(&max)?;
        pad(out, self.format.width_or_zero().saturating_sub(len))?;
        current.render(out)?;
        out.write_char('/')?;
        max.render(out)
    }
}
