//! Structured error types for tputviz
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

/// Failure to read a result file.
///
/// Line numbers are 1-based and point at the offending (or missing) line.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: invalid {field}: {value:?}")]
    Format { line: usize, field: &'static str, value: String },

    #[error("line {line}: unexpected end of input, expected {field}")]
    Truncated { line: usize, field: &'static str },

    #[error("measurement {measurement} has {found} factors, expected {expected}")]
    InconsistentFactorCount { measurement: usize, expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("Plotting is not supported for {0} factors")]
    UnsupportedFactorCount(usize),

    #[error("Result contains no measurements")]
    NoMeasurements,

    #[error("Measurement {measurement} has no level for factor {factor}")]
    MissingFactor { measurement: usize, factor: String },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = ParseError::Format { line: 3, field: "measurement count", value: "x".into() };
        assert_eq!(err.to_string(), "line 3: invalid measurement count: \"x\"");
    }

    #[test]
    fn test_unsupported_factor_count_display() {
        let err = ChartError::UnsupportedFactorCount(3);
        assert_eq!(err.to_string(), "Plotting is not supported for 3 factors");
    }

    #[test]
    fn test_inconsistent_factor_count_mentions_counts() {
        let err = ParseError::InconsistentFactorCount { measurement: 4, expected: 2, found: 1 };
        let msg = err.to_string();
        assert!(msg.contains("measurement 4"));
        assert!(msg.contains("expected 2"));
    }
}
