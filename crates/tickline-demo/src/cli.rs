#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually. Supports environment variable overrides via the
//! `TICKLINE_DEMO_*` prefix; explicit flags win over the environment.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
tickline demo: every widget family redrawn in place

USAGE:
    tickline-demo [OPTIONS]

OPTIONS:
    --duration-ms=N   Run time of each scene in milliseconds (default: 4000)
    --frame-ms=N      Delay between frames in milliseconds (default: 50)
    --width=N         Fixed line width instead of the terminal's
    --help, -h        Show this help message
    --version, -V     Show version

ENVIRONMENT VARIABLES:
    TICKLINE_DEMO_DURATION_MS   Override --duration-ms
    TICKLINE_DEMO_FRAME_MS      Override --frame-ms
    TICKLINE_DEMO_WIDTH         Override --width
    TICKLINE_LOG                Enable logging to stderr (env-filter syntax)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Run time of each scene.
    pub duration_ms: u64,
    /// Delay between frames.
    pub frame_ms: u32,
    /// Fixed width; `None` asks the terminal every frame.
    pub width: Option<u16>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            duration_ms: 4000,
            frame_ms: 50,
            width: None,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse process arguments and environment, exiting on `--help`,
    /// `--version`, or a bad flag.
    pub fn parse() -> Self {
        let args = env::args().skip(1);
        match parse_from(args, |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("tickline-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }
}

/// Parse `args` with `var` standing in for the environment.
pub fn parse_from<I, V>(args: I, var: V) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
    V: Fn(&str) -> Option<String>,
{
    let mut opts = Opts::default();

    // Environment first; malformed values are ignored.
    if let Some(n) = var("TICKLINE_DEMO_DURATION_MS").and_then(|v| v.parse().ok()) {
        opts.duration_ms = n;
    }
    if let Some(n) = var("TICKLINE_DEMO_FRAME_MS").and_then(|v| v.parse().ok()) {
        opts.frame_ms = n;
    }
    if let Some(n) = var("TICKLINE_DEMO_WIDTH").and_then(|v| v.parse().ok()) {
        opts.width = Some(n);
    }

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            other => {
                if let Some(val) = other.strip_prefix("--duration-ms=") {
                    opts.duration_ms = number("--duration-ms", val)?;
                } else if let Some(val) = other.strip_prefix("--frame-ms=") {
                    opts.frame_ms = number("--frame-ms", val)?;
                } else if let Some(val) = other.strip_prefix("--width=") {
                    opts.width = Some(number("--width", val)?);
                } else {
                    return Err(format!("Unknown argument: {other}"));
                }
            }
        }
    }

    Ok(Command::Run(opts))
}

fn number<T: std::str::FromStr>(flag: &str, val: &str) -> Result<T, String> {
    val.parse()
        .map_err(|_| format!("Invalid {flag} value: {val}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.duration_ms, 4000);
        assert_eq!(opts.frame_ms, 50);
        assert_eq!(opts.width, None);
    }

    #[test]
    fn empty_args_run_with_defaults() {
        assert_eq!(
            parse_from(args(&[]), no_env),
            Ok(Command::Run(Opts::default()))
        );
    }

    #[test]
    fn flags_are_parsed() {
        let parsed = parse_from(
            args(&["--duration-ms=100", "--frame-ms=10", "--width=60"]),
            no_env,
        );
        assert_eq!(
            parsed,
            Ok(Command::Run(Opts {
                duration_ms: 100,
                frame_ms: 10,
                width: Some(60),
            }))
        );
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse_from(args(&["-h", "--bogus"]), no_env), Ok(Command::Help));
        assert_eq!(parse_from(args(&["--version"]), no_env), Ok(Command::Version));
    }

    #[test]
    fn unknown_and_malformed_flags_fail() {
        assert!(parse_from(args(&["--bogus"]), no_env).is_err());
        let err = parse_from(args(&["--width=wide"]), no_env).unwrap_err();
        assert!(err.contains("--width"), "{err}");
        assert!(parse_from(args(&["--width=70000"]), no_env).is_err());
    }

    #[test]
    fn env_applies_and_flags_win() {
        let env = |key: &str| match key {
            "TICKLINE_DEMO_FRAME_MS" => Some("20".to_string()),
            "TICKLINE_DEMO_WIDTH" => Some("40".to_string()),
            "TICKLINE_DEMO_DURATION_MS" => Some("soon".to_string()),
            _ => None,
        };
        let Ok(Command::Run(opts)) = parse_from(args(&["--width=50"]), env) else {
            panic!("expected run");
        };
        assert_eq!(opts.frame_ms, 20);
        assert_eq!(opts.width, Some(50));
        assert_eq!(opts.duration_ms, 4000);
    }

    #[test]
    fn help_text_lists_overrides() {
        assert!(HELP_TEXT.contains("TICKLINE_DEMO_FRAME_MS"));
        assert!(HELP_TEXT.contains("--width"));
        assert!(!VERSION.is_empty());
    }
}
