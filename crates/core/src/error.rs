//! Error types for the portfolio-screener system.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to parse a single field or record.
///
/// These are per-record errors: under the default abort policy the first
/// one terminates the run, under the skip policy the record is dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong number of whitespace-separated fields.
    #[error("expected 3 or 4 fields, got {0}")]
    FieldCount(usize),

    /// Amount field is not a finite number.
    #[error("invalid amount {0:?}")]
    Amount(String),

    /// Amount field is negative.
    #[error("negative amount {0:?}")]
    NegativeAmount(String),

    /// Date field does not match MM/dd/yyyy.
    #[error("invalid date {0:?}, expected MM/dd/yyyy")]
    Date(String),
}

/// Main error type for the portfolio-screener system.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed portfolio header (reference date or record count line).
    #[error("invalid portfolio header: {0}")]
    Header(String),

    /// Declared record count does not match the number of trade lines.
    #[error("inconsistent number of trades: declared {declared}, found {found}")]
    CountMismatch { declared: usize, found: usize },

    /// A trade line failed to parse.
    #[error("line {line}: {source}")]
    Record {
        /// 1-based line number in the input file.
        line: usize,
        source: ParseError,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a header error.
    pub fn header(msg: impl Into<String>) -> Self {
        Error::Header(msg.into())
    }

    /// Wrap a parse error with its input line number.
    pub fn record(line: usize, source: ParseError) -> Self {
        Error::Record { line, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_reports_line() {
        let err = Error::record(7, ParseError::FieldCount(2));
        assert_eq!(err.to_string(), "line 7: expected 3 or 4 fields, got 2");
    }

    #[test]
    fn test_count_mismatch_message() {
        let err = Error::CountMismatch {
            declared: 5,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "inconsistent number of trades: declared 5, found 3"
        );
    }
}
