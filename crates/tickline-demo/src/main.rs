#![forbid(unsafe_code)]

//! Animated gallery of tickline widgets.
//!
//! Two scenes run back to back on stdout. The gallery redraws a fixed set of
//! lines covering every widget family; the worker scene uses a [`LineSet`]
//! whose lines come and go while it runs.

mod cli;
mod scenes;

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use tickline::prelude::*;
use tracing::{info, warn};

use crate::cli::Opts;
use crate::scenes::{GalleryFrame, WORKER_NAMES};

fn main() -> ExitCode {
    let opts = Opts::parse();
    init_logging();

    let geometry = TerminalGeometry::detect();
    if !geometry.interactive {
        warn!("stdout is not a terminal; output will contain raw escape sequences");
    }

    let mut ctx = FrameContext::new(WriteSink::stdout());
    let result = gallery(&mut ctx, &opts).and_then(|()| workers(&mut ctx, &opts));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tickline-demo: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr subscriber when `TICKLINE_LOG` is set.
fn init_logging() {
    let Ok(filter) = std::env::var("TICKLINE_LOG") else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn width(opts: &Opts) -> u16 {
    opts.width
        .unwrap_or_else(|| TerminalGeometry::detect().columns)
}

fn pause(opts: &Opts) {
    thread::sleep(Duration::from_millis(u64::from(opts.frame_ms)));
}

// ============================================================================
// Gallery
// ============================================================================

fn gallery<S: Sink>(ctx: &mut FrameContext<S>, opts: &Opts) -> Result<()> {
    info!(duration_ms = opts.duration_ms, "gallery scene");
    let mut t = 0u64;
    loop {
        let done = t >= opts.duration_ms;
        let frame = GalleryFrame::at(t, opts.duration_ms, ctx.elapsed_ms());
        ctx.begin(width(opts), opts.frame_ms)?;
        let drawn = gallery_lines(ctx, &frame);
        let ended = ctx.end(done);
        drawn.and(ended)?;
        if done {
            return Ok(());
        }
        pause(opts);
        t += u64::from(opts.frame_ms).max(1);
    }
}

fn gallery_lines<S: Sink>(ctx: &mut FrameContext<S>, frame: &GalleryFrame) -> Result<()> {
    let current = Some(Value::Int(frame.received));
    let max = Some(Value::Int(scenes::DOWNLOAD_BYTES));

    let header = scenes::header_values(frame);
    ctx.draw_line(None, None, &scenes::HEADER, Value::Composite(&header))?;

    let download = scenes::download_values(frame);
    ctx.draw_line(current, max, &scenes::DOWNLOAD, Value::Composite(&download))?;

    let nulls = [Value::Null; 4];
    ctx.draw_line(current, max, &scenes::SMOOTH, Value::Composite(&nulls))?;
    ctx.draw_line(current, max, &scenes::FIXED, Value::Composite(&nulls))?;

    let stats = scenes::stats_values(frame);
    ctx.draw_line(None, None, &scenes::STATS, Value::Composite(&stats))?;

    ctx.draw_line(None, None, &scenes::SEARCH, Value::Composite(&nulls[..3]))?;

    let tags = scenes::tag_values(frame);
    let note = [
        Value::Composite(&tags),
        Value::Null,
        Value::Str(frame.note()),
    ];
    ctx.draw_line(None, None, &scenes::NOTE, Value::Composite(&note))
}

// ============================================================================
// Workers
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Worker {
    id: LineId,
    name: &'static str,
    started_ms: u64,
    length_ms: u64,
}

impl Worker {
    fn progress_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms).min(self.length_ms)
    }
}

fn as_int(ms: u64) -> Value<'static> {
    Value::Int(i64::try_from(ms).unwrap_or(i64::MAX))
}

fn workers<S: Sink>(ctx: &mut FrameContext<S>, opts: &Opts) -> Result<()> {
    info!(duration_ms = opts.duration_ms, "worker scene");
    let mut set = LineSet::with_capacity(5);
    set.add_line(&scenes::WORKERS_TITLE)?;

    let spawn_every = (opts.duration_ms / WORKER_NAMES.len() as u64).max(1);
    let mut pending = WORKER_NAMES.iter().enumerate();
    let mut active: Vec<Worker> = Vec::new();
    let mut next_spawn = 0u64;
    let mut t = 0u64;

    loop {
        active.retain(|w| {
            let finished = w.progress_ms(t) >= w.length_ms;
            if finished && set.remove_line(w.id).is_err() {
                warn!(name = w.name, "worker line already gone");
            }
            !finished
        });
        while t >= next_spawn {
            let Some((i, &name)) = pending.next() else {
                break;
            };
            match set.add_line(&scenes::WORKER) {
                Ok(id) => active.push(Worker {
                    id,
                    name,
                    started_ms: t,
                    length_ms: spawn_every * (2 + (i as u64 % 3)),
                }),
                Err(Error::Exhausted) => warn!(name, "no room for worker"),
                Err(err) => return Err(err),
            }
            next_spawn += spawn_every;
        }

        let done = active.is_empty() && t >= opts.duration_ms;
        let rows: Vec<(LineId, [Value<'static>; 7], u64, u64)> = active
            .iter()
            .map(|w| {
                (
                    w.id,
                    scenes::worker_values(w.name),
                    w.progress_ms(t),
                    w.length_ms,
                )
            })
            .collect();
        set.draw(ctx, width(opts), opts.frame_ms, done, |id| {
            rows.iter()
                .find(|(row_id, ..)| *row_id == id)
                .map_or(LineValues::new(Value::Null), |(_, values, cur, max)| {
                    LineValues::with_progress(
                        Value::Composite(values),
                        as_int(*cur),
                        as_int(*max),
                    )
                })
        })?;
        if done {
            return Ok(());
        }
        pause(opts);
        t += u64::from(opts.frame_ms).max(1);
    }
}
