//! Custom error types for the payday calculator
//!
//! Only two things can go wrong in a run: the configuration can't be loaded,
//! or the operator types an income we can't parse. Everything else is terminal
//! I/O, plus the budget arithmetic leaving the range a decimal can hold.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for a successful run
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code when the configuration can't be located, read or parsed
pub const EXIT_CONFIG_LOAD: u8 = 1;

/// Exit code when the income override can't be parsed
pub const EXIT_INPUT_PARSE: u8 = 2;

/// The main error type for payday calculator operations
#[derive(Error, Debug)]
pub enum PaydayError {
    /// Configuration file missing, unreadable or malformed
    #[error("Couldn't load config from {}: {reason}", .path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    /// Operator-supplied value didn't parse
    #[error("Couldn't understand your input '{input}': {reason}")]
    InputParse { input: String, reason: String },

    /// Terminal I/O errors (reading prompts, writing output)
    #[error("I/O error: {0}")]
    Io(String),

    /// A total, share or balance doesn't fit in a decimal
    #[error("Amounts are too large to budget: {0} overflowed")]
    AmountOverflow(String),

    /// JSON/CSV export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PaydayError {
    /// Create a config load error for the given path
    pub fn config_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an input parse error
    pub fn input_parse(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::InputParse {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an overflow error naming the figure that didn't fit
    pub fn amount_overflow(what: impl Into<String>) -> Self {
        Self::AmountOverflow(what.into())
    }

    /// Process exit code for this failure class
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigLoad { .. } => EXIT_CONFIG_LOAD,
            Self::InputParse { .. } => EXIT_INPUT_PARSE,
            Self::AmountOverflow(_) | Self::Io(_) | Self::Export(_) => EXIT_CONFIG_LOAD,
        }
    }
}

impl From<std::io::Error> for PaydayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for payday calculator operations
pub type PaydayResult<T> = Result<T, PaydayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_display() {
        let err = PaydayError::config_load("/tmp/config.json", "file not found");
        assert_eq!(
            err.to_string(),
            "Couldn't load config from /tmp/config.json: file not found"
        );
    }

    #[test]
    fn test_input_parse_display() {
        let err = PaydayError::input_parse("abc", "invalid decimal");
        assert_eq!(
            err.to_string(),
            "Couldn't understand your input 'abc': invalid decimal"
        );
        assert!(matches!(err, PaydayError::InputParse { .. }));
    }

    #[test]
    fn test_amount_overflow_display() {
        let err = PaydayError::amount_overflow("payday total");
        assert_eq!(
            err.to_string(),
            "Amounts are too large to budget: payday total overflowed"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(PaydayError::config_load("x", "y").exit_code(), 1);
        assert_eq!(PaydayError::input_parse("x", "y").exit_code(), 2);
        assert_eq!(PaydayError::Io("closed".into()).exit_code(), 1);
        assert_eq!(PaydayError::amount_overflow("payday total").exit_code(), 1);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: PaydayError = io_err.into();
        assert!(matches!(err, PaydayError::Io(_)));
    }
}
