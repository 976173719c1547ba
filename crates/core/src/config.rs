//! Configuration structures for the portfolio-screener system.

use serde::{Deserialize, Serialize};

/// What to do when a trade line fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Abort the run on the first malformed record (default).
    Abort,
    /// Log and skip malformed records, classify the rest.
    Skip,
}

impl Default for ParseErrorPolicy {
    fn default() -> Self {
        ParseErrorPolicy::Abort
    }
}

/// Configuration for a screening run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Policy for malformed trade lines.
    pub on_parse_error: ParseErrorPolicy,
}
