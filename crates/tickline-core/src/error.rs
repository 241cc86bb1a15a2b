#![forbid(unsafe_code)]

//! Error kinds shared by every tickline crate.
//!
//! The engine never recovers internally: the first error aborts the rest of
//! the current line (or frame) and is handed back to the caller unchanged.
//! Output already written to the sink before the failure is not retracted.

use std::fmt;
use std::io;

/// Result alias used throughout tickline.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while producing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A call was made with arguments that can never be valid: a progress
    /// pair with only one side present, mismatched pair types, a value tree
    /// whose shape does not mirror its widget tree, or a call out of phase.
    InvalidArguments(&'static str),
    /// A widget needed a numeric or string value and was handed another kind.
    WrongValueType,
    /// A width could not be resolved before output: two auto-width widgets
    /// share one line, an auto-width widget had to be measured, or the text
    /// contains undisplayable control characters.
    AmbiguousWidth,
    /// A fixed-capacity registry ran out of room.
    Exhausted,
    /// The print sink rejected output.
    Sink(io::ErrorKind),
}

impl Error {
    /// Short, stable name of the error kind (used as a log field).
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::InvalidArguments(_) => "invalid_arguments",
            Self::WrongValueType => "wrong_value_type",
            Self::AmbiguousWidth => "ambiguous_width",
            Self::Exhausted => "exhausted",
            Self::Sink(_) => "sink",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArguments(reason) => write!(f, "invalid arguments: {reason}"),
            Self::WrongValueType => write!(f, "value has the wrong type for its widget"),
            Self::AmbiguousWidth => write!(f, "display width is ambiguous"),
            Self::Exhausted => write!(f, "fixed capacity exhausted"),
            Self::Sink(kind) => write!(f, "print sink failed: {kind}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Sink(err.kind())
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::Sink(io::ErrorKind::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = Error::InvalidArguments("progress pair half present");
        assert_eq!(
            err.to_string(),
            "invalid arguments: progress pair half present"
        );
    }

    #[test]
    fn io_errors_keep_their_kind() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert_eq!(err, Error::Sink(io::ErrorKind::BrokenPipe));
        assert_eq!(err.kind_name(), "sink");
    }

    #[test]
    fn formatter_errors_map_to_sink() {
        let err: Error = fmt::Error.into();
        assert_eq!(err, Error::Sink(io::ErrorKind::Other));
    }

    #[test]
    fn kind_names_are_distinct() {
        let names = [
            Error::InvalidArguments("x").kind_name(),
            Error::WrongValueType.kind_name(),
            Error::AmbiguousWidth.kind_name(),
            Error::Exhausted.kind_name(),
            Error::Sink(io::ErrorKind::Other).kind_name(),
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
