//! Parsing raw portfolio lines into trade records.
//!
//! A trade line holds whitespace-separated fields in fixed order:
//! `amount sector nextPaymentDate isPEP`. The `isPEP` field is optional
//! and lenient; everything else must parse or the record is rejected.

use chrono::NaiveDate;
use screener_core::{ParseError, Trade};

/// Date format used for the reference date and payment dates (MM/dd/yyyy).
///
/// Date fields carry no surrounding whitespace: trade fields come from
/// `split_whitespace`, and [`parse_reference_date`] trims the raw header
/// line itself.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse the run's reference date from the portfolio header line.
pub fn parse_reference_date(s: &str) -> Result<NaiveDate, ParseError> {
    parse_date(s.trim())
}

fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    // chrono's %Y also accepts signed expanded years like "+262142";
    // MM/dd/yyyy means exactly two/two/four digits.
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 2 || i == 5 { *b == b'/' } else { b.is_ascii_digit() });
    if !shape_ok {
        return Err(ParseError::Date(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ParseError::Date(s.to_string()))
}

fn parse_amount(s: &str) -> Result<f64, ParseError> {
    let value: f64 = s
        .parse()
        .map_err(|_| ParseError::Amount(s.to_string()))?;
    if !value.is_finite() {
        return Err(ParseError::Amount(s.to_string()));
    }
    if value < 0.0 {
        return Err(ParseError::NegativeAmount(s.to_string()));
    }
    Ok(value)
}

/// Parse one trade line into a [`Trade`].
///
/// A `Trade` is fully constructed or not at all: any invalid field fails
/// the whole record. The one deliberate exception is `isPEP`, where only
/// the exact literal `"true"` yields true and anything else, including a
/// missing fourth field, yields false.
pub fn parse_trade(line: &str) -> Result<Trade, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(ParseError::FieldCount(fields.len()));
    }

    let value = parse_amount(fields[0])?;
    let next_payment_date = parse_date(fields[2])?;
    let is_politically_exposed = fields.get(3).is_some_and(|s| *s == "true");

    Ok(Trade {
        value,
        client_sector: fields[1].to_string(),
        next_payment_date,
        is_politically_exposed,
    })
}
