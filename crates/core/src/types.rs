//! Core data types for the portfolio-screener system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single trade record from the portfolio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Notional amount. Non-negative and finite.
    pub value: f64,
    /// Client sector label (free text; rules match "Public" / "Private" exactly).
    pub client_sector: String,
    /// Next payment date.
    pub next_payment_date: NaiveDate,
    /// Whether the client is a politically exposed person.
    pub is_politically_exposed: bool,
}

/// Risk/status category assigned to a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Payment overdue by more than the grace period.
    Expired,
    /// High-value trade in the private sector.
    HighRisk,
    /// High-value trade in the public sector.
    MediumRisk,
    /// Politically exposed person.
    Pep,
    /// No specific rule matched.
    #[serde(rename = "NA")]
    NotCategorised,
}

impl Category {
    /// Specific categories in evaluation order. The order is a business
    /// contract: a trade matching several rules gets the first one.
    pub const PRIORITY: [Category; 4] = [
        Category::Expired,
        Category::HighRisk,
        Category::MediumRisk,
        Category::Pep,
    ];

    /// The label emitted for this category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Expired => "EXPIRED",
            Category::HighRisk => "HIGHRISK",
            Category::MediumRisk => "MEDIUMRISK",
            Category::Pep => "PEP",
            Category::NotCategorised => "NA",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
