#![forbid(unsafe_code)]

//! Terminal geometry collaborator.
//!
//! The frame controller never queries the terminal itself. Callers ask this
//! module once per frame and pass the column count into `begin`.

use std::env;
use std::io::{self, IsTerminal};

/// Column count used when neither the terminal nor `COLUMNS` answers.
pub const DEFAULT_COLUMNS: u16 = 80;

/// What the caller knows about the output terminal for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    /// Visible columns.
    pub columns: u16,
    /// Whether stdout is an interactive terminal.
    pub interactive: bool,
}

impl Default for TerminalGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, false)
    }
}

/// Raw inputs for detection, split out so tests can feed fixed values.
#[derive(Debug, Clone, Default)]
struct DetectInputs {
    tty_columns: Option<u16>,
    env_columns: Option<String>,
    interactive: bool,
}

impl DetectInputs {
    fn from_env() -> Self {
        let interactive = io::stdout().is_terminal();
        Self {
            tty_columns: if interactive { query_columns() } else { None },
            env_columns: env::var("COLUMNS").ok(),
            interactive,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn query_columns() -> Option<u16> {
    crossterm::terminal::size().ok().map(|(cols, _rows)| cols)
}

#[cfg(target_arch = "wasm32")]
fn query_columns() -> Option<u16> {
    None
}

impl TerminalGeometry {
    /// Build geometry from known values.
    #[must_use]
    pub const fn new(columns: u16, interactive: bool) -> Self {
        Self {
            columns,
            interactive,
        }
    }

    /// Detect geometry for stdout.
    ///
    /// Columns come from the terminal when stdout is one, then from the
    /// `COLUMNS` environment variable, then [`DEFAULT_COLUMNS`].
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from_inputs(&DetectInputs::from_env())
    }

    fn detect_from_inputs(inputs: &DetectInputs) -> Self {
        let columns = inputs
            .tty_columns
            .filter(|&c| c > 0)
            .or_else(|| {
                inputs
                    .env_columns
                    .as_deref()
                    .and_then(|v| v.trim().parse::<u16>().ok())
                    .filter(|&c| c > 0)
            })
            .unwrap_or(DEFAULT_COLUMNS);
        Self::new(columns, inputs.interactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tty_columns_win() {
        let inputs = DetectInputs {
            tty_columns: Some(132),
            env_columns: Some("90".into()),
            interactive: true,
        };
        assert_eq!(
            TerminalGeometry::detect_from_inputs(&inputs),
            TerminalGeometry::new(132, true)
        );
    }

    #[test]
    fn env_columns_used_when_not_a_tty() {
        let inputs = DetectInputs {
            tty_columns: None,
            env_columns: Some(" 90 ".into()),
            interactive: false,
        };
        assert_eq!(TerminalGeometry::detect_from_inputs(&inputs).columns, 90);
    }

    #[test]
    fn garbage_and_zero_fall_back_to_default() {
        let garbage = DetectInputs {
            env_columns: Some("wide".into()),
            ..DetectInputs::default()
        };
        assert_eq!(
            TerminalGeometry::detect_from_inputs(&garbage).columns,
            DEFAULT_COLUMNS
        );

        let zero = DetectInputs {
            tty_columns: Some(0),
            env_columns: Some("0".into()),
            interactive: true,
        };
        assert_eq!(
            TerminalGeometry::detect_from_inputs(&zero).columns,
            DEFAULT_COLUMNS
        );
    }

    #[test]
    fn default_is_non_interactive() {
        let geom = TerminalGeometry::default();
        assert!(!geom.interactive);
        assert_eq!(geom.columns, DEFAULT_COLUMNS);
    }
}
