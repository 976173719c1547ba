//! Record parsing and trade classification for the portfolio-screener system.
//!
//! This crate handles:
//! - Parsing raw trade lines into [`screener_core::Trade`] values
//! - Rule-based category assignment in fixed priority order
//! - Reading whole portfolio files (header, record count, trade lines)

pub mod classifier;
pub mod parser;
pub mod portfolio;

pub use classifier::{classify, ScreeningStats, TradeClassifier};
pub use parser::{parse_reference_date, parse_trade};
pub use portfolio::{screen_portfolio, ScreeningReport};
