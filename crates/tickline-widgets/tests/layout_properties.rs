//! Property tests for formatting and line layout.
//!
//! 1. Formatter measurement equals the written length for every unit,
//!    field width, and precision.
//! 2. String fitting respects max length and field width, and reports the
//!    columns it actually produces.
//! 3. A line with one auto-width bar fills the terminal exactly when it can.
//! 4. Fixed-width bars always occupy their field width plus end caps, also
//!    when the edge is a readout whose width changes with progress.
//! 5. `natural_width` agrees with what `draw` emits.

use proptest::prelude::*;
use tickline_render::CaptureSink;
use tickline_text::display_width;
use tickline_widgets::format::{self, Fraction, Percent, Scalar};
use tickline_widgets::prelude::*;
use tickline_widgets::string::fit;

// ── Strategies ──────────────────────────────────────────────────────────

fn unit() -> impl Strategy<Value = Unit> {
    prop_oneof![
        Just(Unit::None),
        Just(Unit::Bytes),
        Just(Unit::Kilobytes),
        Just(Unit::Megabytes),
        Just(Unit::Gigabytes),
        Just(Unit::DynamicSize),
        Just(Unit::Seconds),
        Just(Unit::HmsLetters),
        Just(Unit::HmsColons),
    ]
}

fn number_format() -> impl Strategy<Value = NumberFormat> {
    (unit(), proptest::option::of(0u16..40), proptest::option::of(0u8..10)).prop_map(
        |(unit, field_width, precision)| NumberFormat {
            unit,
            field_width,
            precision,
        },
    )
}

fn numeric() -> impl Strategy<Value = Value<'static>> {
    prop_oneof![
        (-1_000_000_000_000i64..1_000_000_000_000).prop_map(Value::Int),
        (-1.0e12f64..1.0e12).prop_map(Value::Double),
    ]
}

fn word() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            (0x61u32..=0x7A).prop_map(|cp| char::from_u32(cp).unwrap()),
            (0x4E00u32..=0x4E40).prop_map(|cp| char::from_u32(cp).unwrap()),
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn progress() -> impl Strategy<Value = Progress<'static>> {
    (0i64..200, 1i64..200).prop_map(|(cur, max)| {
        Progress::from_pair(Some(Value::Int(cur)), Some(Value::Int(max))).unwrap()
    })
}

fn rendered(widget: &Widget<'_>, value: Value<'_>, env: &DrawEnv<'_>) -> (String, usize) {
    let mut sink = CaptureSink::new();
    let cols = draw(&mut sink, widget, value, env).unwrap();
    (sink.output, cols)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Measurement equals writing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scalar_measure_matches_write(fmt in number_format(), value in numeric()) {
        let scalar = Scalar::new(fmt, value);
        let mut text = String::new();
        let written = format::write(&scalar, &mut text).unwrap();
        prop_assert_eq!(format::measure(&scalar).unwrap(), written);
        prop_assert_eq!(written, text.len());
        if let Some(w) = fmt.field_width {
            prop_assert!(written >= usize::from(w));
        }
    }

    #[test]
    fn percent_measure_matches_write(
        field_width in proptest::option::of(0u16..20),
        precision in proptest::option::of(0u8..8),
        fraction in 0.0f32..=1.0,
    ) {
        let pct = Percent::new(PercentFormat { field_width, precision }, fraction);
        let mut text = String::new();
        let written = format::write(&pct, &mut text).unwrap();
        prop_assert_eq!(format::measure(&pct).unwrap(), written);
        prop_assert!(text.ends_with('%'));
    }

    #[test]
    fn fraction_measure_matches_write(fmt in number_format(), a in numeric(), b in numeric()) {
        let frac = Fraction::new(fmt, a, b);
        let mut text = String::new();
        let written = format::write(&frac, &mut text).unwrap();
        prop_assert_eq!(format::measure(&frac).unwrap(), written);
        prop_assert!(text.contains('/'));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. String fitting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fitted_string_respects_bounds(
        text in word(),
        field_width in proptest::option::of(0u16..30),
        max_len in proptest::option::of(0u16..30),
        marker in proptest::option::of(prop_oneof![Just("..."), Just("…"), Just("")]),
        trim_left in any::<bool>(),
    ) {
        let field = StringField { field_width, max_len, trim_marker: marker, trim_left };
        let fitted = fit(&field, Some(text.as_str())).unwrap();
        let content = fitted.width - fitted.pad;
        let shown = format!("{}{}{}", fitted.lead, fitted.body, fitted.tail);

        prop_assert_eq!(display_width(&shown), Some(content));
        if let Some(max) = max_len {
            prop_assert!(content <= usize::from(max));
        }
        prop_assert_eq!(fitted.width, content.max(usize::from(field_width.unwrap_or(0))));
        if fitted.lead.is_empty() && fitted.tail.is_empty() {
            let piece = fitted.body;
            prop_assert!(
                if trim_left { text.ends_with(piece) } else { text.starts_with(piece) },
                "body is not a prefix/suffix of the source text"
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Auto-width bars fill the line
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn auto_bar_fills_terminal(
        width in 0usize..160,
        prefix in "[a-z]{0,10}",
        suffix in "[a-z]{0,10}",
        progress in progress(),
    ) {
        let edge = Widget::Label(">");
        let parts = [
            Widget::Label(&prefix),
            Widget::ProgressBar(ProgressBar::auto("[", "]", "#", ".", &edge)),
            Widget::Label(&suffix),
        ];
        let line = Widget::Composite(Composite::new(&parts));
        let values = [Value::Null; 3];
        let env = DrawEnv::new(width, 0, progress);
        let (out, cols) = rendered(&line, Value::Composite(&values), &env);

        let fixed = prefix.len() + suffix.len() + 2;
        prop_assert_eq!(cols, width.max(fixed));
        prop_assert_eq!(display_width(&out), Some(cols));
        prop_assert!(out.starts_with(&prefix));
        prop_assert!(out.ends_with(&suffix));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Fixed-width bars
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fixed_bar_width_is_stable(
        bar_w in 0u16..60,
        edge in prop_oneof![Just(""), Just(">"), Just("<=>"), Just("🚀")],
        progress in progress(),
        scale in any::<bool>(),
    ) {
        let edge = Widget::Label(edge);
        let mut bar = ProgressBar::auto("|", "|", "=", "-", &edge).width(bar_w);
        bar.scale_fill = scale;
        let widget = Widget::ProgressBar(bar);
        let env = DrawEnv::new(80, 0, progress);
        let (out, cols) = rendered(&widget, Value::Null, &env);

        prop_assert_eq!(cols, usize::from(bar_w) + 2);
        prop_assert_eq!(display_width(&out), Some(cols));
        prop_assert_eq!(natural_width(&widget, Value::Null, &env), Ok(cols));
    }

    #[test]
    fn progress_driven_edges_keep_bar_width(
        bar_w in 0u16..60,
        fraction in 0.0f64..=1.0,
        precision in 0u8..3,
        use_label in any::<bool>(),
        scale in any::<bool>(),
    ) {
        let steps = [
            LabelStep::new(0.25, "."),
            LabelStep::new(0.5, "o"),
            LabelStep::new(0.75, "(O)"),
            LabelStep::new(2.0, "[##]"),
        ];
        let edge = if use_label {
            Widget::ProgressLabel(ProgressLabel::new(&steps))
        } else {
            Widget::ProgressPercent(PercentFormat::new().precision(precision))
        };
        let mut bar = ProgressBar::auto("[", "]", "=", " ", &edge).width(bar_w);
        bar.scale_fill = scale;
        let widget = Widget::ProgressBar(bar);
        let progress =
            Progress::from_pair(Some(Value::Double(fraction)), Some(Value::Double(1.0))).unwrap();
        let env = DrawEnv::new(80, 0, progress);
        let (out, cols) = rendered(&widget, Value::Null, &env);

        prop_assert_eq!(cols, usize::from(bar_w) + 2);
        prop_assert_eq!(display_width(&out), Some(cols));
        prop_assert_eq!(natural_width(&widget, Value::Null, &env), Ok(cols));

        // The same bar at auto width still fills the line exactly.
        let mut auto = bar;
        auto.field_width = None;
        let parts = [Widget::ProgressBar(auto), Widget::Label("|")];
        let line = Widget::Composite(Composite::new(&parts));
        let values = [Value::Null; 2];
        let width = usize::from(bar_w) + 3;
        let env = DrawEnv::new(width, 0, progress);
        let (out, cols) = rendered(&line, Value::Composite(&values), &env);
        prop_assert_eq!(cols, width);
        prop_assert_eq!(display_width(&out), Some(width));
    }

    #[test]
    fn ping_pong_stays_inside(
        bar_w in 0u16..40,
        elapsed in 0u64..100_000,
        speed in 0u16..200,
    ) {
        let ball = Widget::Label("<>");
        let widget = Widget::PingPongBar(PingPongBar::auto("[", "]", &ball, " ", speed).width(bar_w));
        let env = DrawEnv::new(80, elapsed, Progress::NONE);
        let (out, cols) = rendered(&widget, Value::Null, &env);
        prop_assert_eq!(cols, usize::from(bar_w) + 2);
        prop_assert_eq!(display_width(&out), Some(cols));
        prop_assert_eq!(out.contains("<>"), bar_w >= 2);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. natural_width agrees with draw
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn natural_width_matches_draw(
        text in word(),
        fmt in number_format(),
        number in numeric(),
        max_len in proptest::option::of(0u16..40),
        progress in progress(),
    ) {
        let parts = [
            Widget::String(StringField { max_len, ..StringField::NATURAL }),
            Widget::Scalar(fmt),
            Widget::ProgressPercent(PercentFormat::new().precision(1)),
            Widget::ProgressFraction(NumberFormat::PLAIN),
        ];
        let bounded = Widget::Composite(Composite { widgets: &parts, max_len });
        let values = [Value::Str(&text), number, Value::Null, Value::Null];
        let env = DrawEnv::new(80, 0, progress);

        for widget in [Widget::Composite(Composite::new(&parts)), bounded] {
            let measured = natural_width(&widget, Value::Composite(&values), &env).unwrap();
            let (out, cols) = rendered(&widget, Value::Composite(&values), &env);
            prop_assert_eq!(measured, cols);
            prop_assert_eq!(display_width(&out), Some(cols));
        }
    }
}
