#![forbid(unsafe_code)]

//! Clipping and padding of string values.

use tickline_core::{Error, Result};
use tickline_text::{Clip, clip_prefix, clip_suffix, display_width};

use crate::widget::StringField;

/// A string value laid out for its field: `pad` spaces, then `lead`,
/// `body`, and `tail` in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FittedString<'a> {
    pub pad: usize,
    pub lead: &'a str,
    pub body: &'a str,
    pub tail: &'a str,
    /// Total columns, padding included.
    pub width: usize,
}

/// Lay out `text` (or an absent string) for `field`.
///
/// When `text` is wider than `max_len` it is clipped at a code point
/// boundary. A trim marker takes its columns out of the clipped span and is
/// only shown when that span is wider than the marker itself. Field-width
/// padding is applied last and never affects clipping.
///
/// # Errors
///
/// [`Error::AmbiguousWidth`] if `text` or the marker contains a control
/// character.
pub fn fit<'a>(field: &StringField<'a>, text: Option<&'a str>) -> Result<FittedString<'a>> {
    let field_width = field.field_width.map_or(0, usize::from);
    let Some(text) = text else {
        return Ok(FittedString {
            pad: field_width,
            lead: "",
            body: "",
            tail: "",
            width: field_width,
        });
    };

    let full = display_width(text).ok_or(Error::AmbiguousWidth)?;
    let clip = |cols: usize| -> Result<Clip<'a>> {
        let clipped = if field.trim_left {
            clip_suffix(text, cols)
        } else {
            clip_prefix(text, cols)
        };
        clipped.ok_or(Error::AmbiguousWidth)
    };

    let (lead, body, tail, content) = match field.max_len.map(usize::from) {
        Some(max) if full > max => {
            let span = clip(max)?;
            let marker = match field.trim_marker {
                Some(m) => Some((m, display_width(m).ok_or(Error::AmbiguousWidth)?)),
                None => None,
            };
            match marker {
                Some((m, mw)) if mw > 0 && span.width > mw => {
                    let inner = clip(span.width - mw)?;
                    if field.trim_left {
                        (m, inner.text, "", mw + inner.width)
                    } else {
                        ("", inner.text, m, inner.width + mw)
                    }
                }
                _ => ("", span.text, "", span.width),
            }
        }
        _ => ("", text, "", full),
    };

    let pad = field_width.saturating_sub(content);
    Ok(FittedString {
        pad,
        lead,
        body,
        tail,
        width: pad + content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(field: StringField<'_>, text: &str) -> (String, usize) {
        let f = fit(&field, Some(text)).unwrap();
        let s = format!("{}{}{}{}", " ".repeat(f.pad), f.lead, f.body, f.tail);
        (s, f.width)
    }

    #[test]
    fn fits_untouched() {
        assert_eq!(show(StringField::NATURAL, "hello"), ("hello".into(), 5));
        assert_eq!(show(StringField::new().max_len(10), "hello"), ("hello".into(), 5));
    }

    #[test]
    fn field_width_pads_left() {
        assert_eq!(show(StringField::new().width(5), "abc"), ("  abc".into(), 5));
        assert_eq!(show(StringField::new().width(2), "abc"), ("abc".into(), 3));
    }

    #[test]
    fn clips_right_by_default() {
        let field = StringField::new().max_len(5);
        assert_eq!(show(field, "abcdefghijklmnop"), ("abcde".into(), 5));
    }

    #[test]
    fn clips_left_when_asked() {
        let field = StringField::new().max_len(6).trim_left();
        assert_eq!(show(field, "L1234554321R"), ("54321R".into(), 6));
    }

    #[test]
    fn marker_is_budgeted_inside_max_len() {
        let right = StringField::new().max_len(9).trim_marker("...");
        assert_eq!(show(right, "abcdefghijklmnop"), ("abcdef...".into(), 9));

        let left = right.trim_left();
        assert_eq!(show(left, "L1234554321R"), ("...54321R".into(), 9));
    }

    #[test]
    fn marker_dropped_when_span_is_too_small() {
        let field = StringField::new().max_len(2).trim_marker("...");
        assert_eq!(show(field, "L1234554321R"), ("L1".into(), 2));
        assert_eq!(show(field.trim_left(), "L1234554321R"), ("1R".into(), 2));
    }

    #[test]
    fn wide_chars_never_split() {
        let field = StringField::new().width(10).max_len(5);
        assert_eq!(show(field, "😀😃😄😁😆"), ("      😀😃".into(), 10));
    }

    #[test]
    fn padding_follows_clipping() {
        let field = StringField::new().width(8).max_len(3);
        assert_eq!(show(field, "abcdef"), ("     abc".into(), 8));
    }

    #[test]
    fn absent_string_is_padding_only() {
        let f = fit(&StringField::new().width(4), None).unwrap();
        assert_eq!((f.pad, f.body, f.width), (4, "", 4));
        assert_eq!(fit(&StringField::NATURAL, None).unwrap().width, 0);
    }

    #[test]
    fn control_characters_are_ambiguous() {
        assert_eq!(
            fit(&StringField::NATURAL, Some("a\tb")),
            Err(Error::AmbiguousWidth)
        );
    }
}
