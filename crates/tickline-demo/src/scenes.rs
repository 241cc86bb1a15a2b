#![forbid(unsafe_code)]

//! Line definitions and per-frame values for the demo scenes.

use tickline::prelude::*;

// ============================================================================
// Gallery
// ============================================================================

static HEADER_PARTS: [Widget; 7] = [
    Widget::Label(color::FG_CYAN),
    Widget::Label("tickline"),
    Widget::Label(color::RESET),
    Widget::Label(" "),
    Widget::Spinner(Spinner::new(frames::DOTS, 80)),
    Widget::Label(" elapsed "),
    Widget::Scalar(NumberFormat::new(Unit::HmsColons)),
];
pub static HEADER: Widget = Widget::Composite(Composite::new(&HEADER_PARTS));

static ARROW: Widget = Widget::Label(">");
static DOWNLOAD_PARTS: [Widget; 7] = [
    Widget::String(
        StringField::new()
            .width(16)
            .max_len(16)
            .trim_marker("...")
            .trim_left(),
    ),
    Widget::Label(" "),
    Widget::ProgressBar(ProgressBar::auto("[", "]", "=", " ", &ARROW)),
    Widget::Label(" "),
    Widget::ProgressPercent(PercentFormat::new().width(4).precision(0)),
    Widget::Label(" "),
    Widget::ProgressFraction(NumberFormat::new(Unit::DynamicSize).precision(1)),
];
pub static DOWNLOAD: Widget = Widget::Composite(Composite::new(&DOWNLOAD_PARTS));

static EIGHTHS: [LabelStep; 8] = [
    LabelStep::new(0.125, " "),
    LabelStep::new(0.25, "▏"),
    LabelStep::new(0.375, "▎"),
    LabelStep::new(0.5, "▍"),
    LabelStep::new(0.625, "▌"),
    LabelStep::new(0.75, "▋"),
    LabelStep::new(0.875, "▊"),
    LabelStep::new(2.0, "▉"),
];
static EIGHTH_EDGE: Widget = Widget::ProgressLabel(ProgressLabel::new(&EIGHTHS));
static STAGES: [LabelStep; 3] = [
    LabelStep::new(0.5, "warming"),
    LabelStep::new(1.0, "working"),
    LabelStep::new(2.0, "done"),
];
static SMOOTH_PARTS: [Widget; 4] = [
    Widget::Label("smooth "),
    Widget::ProgressBar(ProgressBar::auto("│", "│", "█", " ", &EIGHTH_EDGE).scale_fill()),
    Widget::Label(" "),
    Widget::ProgressLabel(ProgressLabel::new(&STAGES).width(7)),
];
pub static SMOOTH: Widget = Widget::Composite(Composite::new(&SMOOTH_PARTS));

static HASH: Widget = Widget::Label("#");
static FIXED_PARTS: [Widget; 4] = [
    Widget::Label("fixed  "),
    Widget::ProgressBar(ProgressBar::auto("<", ">", "#", ".", &HASH).width(20)),
    Widget::Label(" at "),
    Widget::ProgressScalar(NumberFormat::new(Unit::Megabytes).precision(2).width(8)),
];
pub static FIXED: Widget = Widget::Composite(Composite::new(&FIXED_PARTS));

static STATS_PARTS: [Widget; 8] = [
    Widget::Spinner(Spinner::new(frames::BRAILLE, 100)),
    Widget::Label(" rate "),
    Widget::Scalar(NumberFormat::new(Unit::Kilobytes).precision(1).width(9)),
    Widget::Label("/s  sent "),
    Widget::Scalar(NumberFormat::new(Unit::Bytes).width(10)),
    Widget::Label("  eta "),
    Widget::Scalar(NumberFormat::new(Unit::HmsLetters).width(8)),
    Widget::Scalar(NumberFormat::new(Unit::Seconds).width(6)),
];
pub static STATS: Widget = Widget::Composite(Composite::new(&STATS_PARTS));

static BALL: Widget = Widget::Label("<=>");
static SEARCH_PARTS: [Widget; 3] = [
    Widget::Spinner(Spinner::new(frames::MOON, 120)),
    Widget::Label(" searching "),
    Widget::PingPongBar(PingPongBar::auto("[", "]", &BALL, " ", 40)),
];
pub static SEARCH: Widget = Widget::Composite(Composite::new(&SEARCH_PARTS));

static TAG_PARTS: [Widget; 4] = [
    Widget::Label("tags: "),
    Widget::String(StringField::NATURAL),
    Widget::Label(", "),
    Widget::String(StringField::NATURAL),
];
static NOTE_PARTS: [Widget; 3] = [
    Widget::Composite(Composite::new(&TAG_PARTS).max_len(24)),
    Widget::Label(" | "),
    Widget::String(StringField::new().max_len(32).trim_marker("…")),
];
pub static NOTE: Widget = Widget::Composite(Composite::new(&NOTE_PARTS));

const FILES: [&str; 4] = [
    "assets/textures/terrain_diffuse_4k.png",
    "README.md",
    "vendor/archive/toolchain-nightly.tar.zst",
    "db/snapshot.sqlite",
];

const TAGS: [(&str, &str); 3] = [
    ("net", "io"),
    ("checksum", "long-running-verification"),
    ("cache", "warm"),
];

const NOTES: [&str; 3] = [
    "resuming from the last checkpoint",
    "mirror responded slowly, retrying with a backup host",
    "ok",
];

/// Total size of the simulated download.
pub const DOWNLOAD_BYTES: i64 = 48 << 20;

/// Inputs shared by every gallery line for one frame.
#[derive(Debug, Clone, Copy)]
pub struct GalleryFrame {
    /// Bytes received so far.
    pub received: i64,
    /// Time shown in the header and eta.
    pub elapsed_ms: u64,
    /// Scene time remaining.
    pub remaining_ms: u64,
}

impl GalleryFrame {
    /// Frame `t_ms` into a scene lasting `duration_ms`.
    #[must_use]
    pub fn at(t_ms: u64, duration_ms: u64, elapsed_ms: u64) -> Self {
        let duration = duration_ms.max(1);
        let t = t_ms.min(duration);
        let received = i128::from(DOWNLOAD_BYTES) * i128::from(t) / i128::from(duration);
        Self {
            received: i64::try_from(received).unwrap_or(DOWNLOAD_BYTES),
            elapsed_ms,
            remaining_ms: duration - t,
        }
    }

    /// File name shown on the download line; rotates as progress passes
    /// each quarter.
    #[must_use]
    pub fn file(&self) -> &'static str {
        let quarter = self.received * 4 / DOWNLOAD_BYTES;
        FILES[usize::try_from(quarter).unwrap_or(0).min(FILES.len() - 1)]
    }

    #[must_use]
    pub fn tags(&self) -> (&'static str, &'static str) {
        TAGS[self.step(TAGS.len())]
    }

    #[must_use]
    pub fn note(&self) -> &'static str {
        NOTES[self.step(NOTES.len())]
    }

    /// Bytes per second over the elapsed time.
    #[must_use]
    pub fn rate(&self) -> f64 {
        if self.elapsed_ms == 0 {
            return 0.0;
        }
        self.received as f64 * 1000.0 / self.elapsed_ms as f64
    }

    fn step(&self, len: usize) -> usize {
        usize::try_from(self.elapsed_ms / 1500).unwrap_or(0) % len
    }
}

fn seconds(ms: u64) -> Value<'static> {
    Value::Int(i64::try_from(ms / 1000).unwrap_or(i64::MAX))
}

/// Values for [`HEADER`].
#[must_use]
pub fn header_values(frame: &GalleryFrame) -> [Value<'static>; 7] {
    let mut values = [Value::Null; 7];
    values[6] = seconds(frame.elapsed_ms);
    values
}

/// Values for [`DOWNLOAD`].
#[must_use]
pub fn download_values(frame: &GalleryFrame) -> [Value<'static>; 7] {
    let mut values = [Value::Null; 7];
    values[0] = Value::Str(frame.file());
    values
}

/// Values for [`STATS`].
#[must_use]
pub fn stats_values(frame: &GalleryFrame) -> [Value<'static>; 8] {
    let eta = seconds(frame.remaining_ms);
    [
        Value::Null,
        Value::Null,
        Value::Double(frame.rate()),
        Value::Null,
        Value::Int(frame.received),
        Value::Null,
        eta,
        eta,
    ]
}

/// Values for the tag group inside [`NOTE`].
#[must_use]
pub fn tag_values(frame: &GalleryFrame) -> [Value<'static>; 4] {
    let (first, second) = frame.tags();
    [Value::Null, Value::Str(first), Value::Null, Value::Str(second)]
}

// ============================================================================
// Workers
// ============================================================================

pub static WORKERS_TITLE: Widget = Widget::Label("workers:");

static WORKER_PARTS: [Widget; 7] = [
    Widget::Label("  "),
    Widget::Spinner(Spinner::new(frames::LINE, 100)),
    Widget::Label(" "),
    Widget::String(StringField::new().width(9)),
    Widget::ProgressBar(ProgressBar::auto("|", "|", "#", "-", &HASH)),
    Widget::Label(" "),
    Widget::ProgressPercent(PercentFormat::new().width(4).precision(0)),
];
pub static WORKER: Widget = Widget::Composite(Composite::new(&WORKER_PARTS));

pub const WORKER_NAMES: [&str; 7] = [
    "fetch", "unpack", "verify", "index", "compress", "upload", "notify",
];

/// Values for one [`WORKER`] line.
#[must_use]
pub fn worker_values(name: &'static str) -> [Value<'static>; 7] {
    let mut values = [Value::Null; 7];
    values[3] = Value::Str(name);
    values
}
