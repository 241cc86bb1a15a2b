#![forbid(unsafe_code)]

//! Per-frame values.
//!
//! A [`Value`] is what changes from one frame to the next: a byte count, a
//! file name, the children of a composite. Values are borrowed for a single
//! draw call and never retained.

use std::fmt;

/// Data paired with a widget for one draw call.
///
/// A composite value must mirror the composite widget it is paired with,
/// child for child.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value<'a> {
    /// No data. Labels, spinners, and progress-driven widgets take this.
    #[default]
    Null,
    Int(i64),
    Double(f64),
    Str(&'a str),
    Composite(&'a [Value<'a>]),
}

impl<'a> Value<'a> {
    /// Whether this is an `Int` or a `Double`.
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Double(_))
    }

    /// Numeric value widened to `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Int(i) => Some(i as f64),
            Self::Double(d) => Some(d),
            _ => None,
        }
    }

    /// Numeric value as `i64`, truncating doubles toward zero.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(i) => Some(i),
            Self::Double(d) => Some(d as i64),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_composite(&self) -> Option<&'a [Value<'a>]> {
        match *self {
            Self::Composite(values) => Some(values),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::Str(_) => "string",
            Self::Composite(_) => "composite",
        }
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value<'_> {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Self::Str(v)
    }
}

impl<'a> From<&'a [Value<'a>]> for Value<'a> {
    fn from(v: &'a [Value<'a>]) -> Self {
        Self::Composite(v)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::Str(s) => f.write_str(s),
            Self::Composite(values) => write!(f, "[{} values]", values.len()),
        }
    }
}
