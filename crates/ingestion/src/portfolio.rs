//! Reading and screening whole portfolio files.
//!
//! Expected file layout:
//! - line 1: reference date, MM/dd/yyyy
//! - line 2: declared number of trade records, must equal the remaining
//!   line count
//! - lines 3..N: one trade per line, `amount sector nextPaymentDate isPEP`

use chrono::NaiveDate;
use screener_core::{Category, Error, ParseErrorPolicy, Result, RunConfig};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use tracing::{debug, warn};

use crate::classifier::{ScreeningStats, TradeClassifier};
use crate::parser::{parse_reference_date, parse_trade};

/// Outcome of screening one portfolio file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Reference date from the file header.
    pub reference_date: NaiveDate,
    /// One category per surviving trade line, in input order.
    pub labels: Vec<Category>,
    /// 1-based line numbers skipped under the skip policy.
    pub skipped_lines: Vec<usize>,
    /// Run counters.
    pub stats: ScreeningStats,
}

/// Screen a whole portfolio file.
///
/// Fatal errors (unreadable source, malformed header, declared count not
/// matching the trade line count) abort with zero trades classified.
/// Malformed trade lines follow `config.on_parse_error`: abort on the
/// first one by default, or log and skip when opted in.
pub fn screen_portfolio<R: BufRead>(reader: R, config: &RunConfig) -> Result<ScreeningReport> {
    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;

    let reference_date = lines
        .first()
        .ok_or_else(|| Error::header("missing reference date line"))
        .and_then(|line| {
            parse_reference_date(line).map_err(|e| Error::header(e.to_string()))
        })?;

    let declared: usize = lines
        .get(1)
        .ok_or_else(|| Error::header("missing record count line"))?
        .trim()
        .parse()
        .map_err(|_| Error::header(format!("invalid record count {:?}", lines[1].trim())))?;

    let found = lines.len() - 2;
    if declared != found {
        return Err(Error::CountMismatch { declared, found });
    }
    debug!(%reference_date, records = declared, "screening portfolio");

    let mut classifier = TradeClassifier::new(reference_date);
    let mut labels = Vec::with_capacity(found);
    let mut skipped_lines = Vec::new();

    for (idx, line) in lines[2..].iter().enumerate() {
        let line_no = idx + 3;
        match parse_trade(line) {
            Ok(trade) => labels.push(classifier.classify(&trade)),
            Err(source) => match config.on_parse_error {
                ParseErrorPolicy::Abort => return Err(Error::record(line_no, source)),
                ParseErrorPolicy::Skip => {
                    warn!(line = line_no, error = %source, "skipping malformed record");
                    classifier.record_skip();
                    skipped_lines.push(line_no);
                }
            },
        }
    }

    Ok(ScreeningReport {
        reference_date,
        labels,
        skipped_lines,
        stats: classifier.into_stats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_core::ParseError;
    use std::io::Cursor;

    fn screen(input: &str, config: &RunConfig) -> Result<ScreeningReport> {
        screen_portfolio(Cursor::new(input), config)
    }

    const PORTFOLIO: &str = "\
06/01/2023
4
2000000 Private 12/01/2023 false
2000000 Public 12/01/2023 false
500000 Public 01/01/2023 false
500 Public 12/01/2023 true
";

    #[test]
    fn test_screen_portfolio() {
        let report = screen(PORTFOLIO, &RunConfig::default()).unwrap();
        assert_eq!(
            report.labels,
            vec![
                Category::HighRisk,
                Category::MediumRisk,
                Category::Expired,
                Category::Pep,
            ]
        );
        assert!(report.skipped_lines.is_empty());
        assert_eq!(report.stats.total_trades, 4);
        assert_eq!(report.stats.expired, 1);
    }

    #[test]
    fn test_count_mismatch_is_fatal() {
        let input = "06/01/2023\n3\n500 Public 12/01/2023 true\n";
        let err = screen(input, &RunConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::CountMismatch {
                declared: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn test_missing_header_lines() {
        assert!(matches!(
            screen("", &RunConfig::default()).unwrap_err(),
            Error::Header(_)
        ));
        assert!(matches!(
            screen("06/01/2023\n", &RunConfig::default()).unwrap_err(),
            Error::Header(_)
        ));
    }

    #[test]
    fn test_bad_reference_date() {
        let err = screen("junk\n0\n", &RunConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Header(_)));
    }

    #[test]
    fn test_bad_record_count() {
        let err = screen("06/01/2023\nmany\n", &RunConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Header(_)));
    }

    #[test]
    fn test_abort_on_first_bad_record() {
        let input = "\
06/01/2023
2
500 Public
500 Public 12/01/2023 true
";
        let err = screen(input, &RunConfig::default()).unwrap_err();
        match err {
            Error::Record { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, ParseError::FieldCount(2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_signed_year_line_is_a_record_error() {
        // A signed expanded year must surface as a parse error for that
        // line, not crash the run in the expiry rule.
        let input = "06/01/2023\n1\n1 Public 12/31/+262142 false\n";
        let err = screen(input, &RunConfig::default()).unwrap_err();
        match err {
            Error::Record { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, ParseError::Date("12/31/+262142".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skip_policy_continues() {
        let input = "\
06/01/2023
3
500 Public
2000000 Private 12/01/2023 false
500 Public 12/01/2023 true
";
        let config = RunConfig {
            on_parse_error: ParseErrorPolicy::Skip,
        };
        let report = screen(input, &config).unwrap();
        assert_eq!(report.labels, vec![Category::HighRisk, Category::Pep]);
        assert_eq!(report.skipped_lines, vec![3]);
        assert_eq!(report.stats.skipped, 1);
        assert_eq!(report.stats.total_trades, 2);
    }

    #[test]
    fn test_empty_portfolio() {
        let report = screen("06/01/2023\n0\n", &RunConfig::default()).unwrap();
        assert!(report.labels.is_empty());
        assert_eq!(report.stats.total_trades, 0);
    }
}
