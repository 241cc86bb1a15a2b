#![forbid(unsafe_code)]

//! Line progress: the optional `(current, max)` pair and its fraction.

use tickline_core::{Error, Result};

use crate::value::Value;

/// Progress state of one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress<'a> {
    pair: Option<(Value<'a>, Value<'a>)>,
    fraction: f32,
}

impl<'a> Progress<'a> {
    /// A line with no progress. Its fraction reads as zero.
    pub const NONE: Self = Self {
        pair: None,
        fraction: 0.0,
    };

    /// Build from the optional pair supplied with a line.
    ///
    /// Both sides must be present or both absent. When present they must be
    /// both `Int` or both `Double`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArguments`] for a half-present pair, a string or
    /// non-numeric side, or mismatched numeric types.
    pub fn from_pair(current: Option<Value<'a>>, max: Option<Value<'a>>) -> Result<Self> {
        let (current, max) = match (current, max) {
            (None, None) => return Ok(Self::NONE),
            (Some(c), Some(m)) => (c, m),
            _ => return Err(Error::InvalidArguments("progress pair is half present")),
        };
        let fraction = match (current, max) {
            (Value::Int(c), Value::Int(m)) => {
                if c >= m {
                    1.0
                } else {
                    clamp_unit(c as f32 / m as f32)
                }
            }
            (Value::Double(c), Value::Double(m)) => clamp_unit((c / m) as f32),
            (Value::Int(_) | Value::Double(_), Value::Int(_) | Value::Double(_)) => {
                return Err(Error::InvalidArguments("progress pair types differ"));
            }
            _ => return Err(Error::InvalidArguments("progress pair is not numeric")),
        };
        Ok(Self {
            pair: Some((current, max)),
            fraction,
        })
    }

    /// Progress expressed directly as a fraction of one, with `current` set
    /// to the fraction and `max` to `1.0`.
    #[must_use]
    pub fn unit(fraction: f32) -> Self {
        let fraction = clamp_unit(fraction);
        Self {
            pair: Some((Value::Double(f64::from(fraction)), Value::Double(1.0))),
            fraction,
        }
    }

    /// Completion in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn fraction(&self) -> f32 {
        self.fraction
    }

    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.pair.is_some()
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<Value<'a>> {
        self.pair.map(|(c, _)| c)
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> Option<Value<'a>> {
        self.pair.map(|(_, m)| m)
    }
}

impl Default for Progress<'_> {
    fn default() -> Self {
        Self::NONE
    }
}

/// Clamp into `[0, 1]`, mapping NaN to zero.
#[inline]
pub(crate) fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}
