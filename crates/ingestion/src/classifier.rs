//! Rule-based trade categorization.
//!
//! Categories are assigned by evaluating a fixed list of predicates in
//! priority order and taking the first match. The order is part of the
//! business contract: an expired trade is reported as EXPIRED even if it
//! would also qualify as high risk or PEP.

use chrono::{Days, NaiveDate};
use screener_core::{Category, Trade};
use serde::{Deserialize, Serialize};

/// Amounts strictly above this are considered high value.
pub const HIGH_VALUE_THRESHOLD: f64 = 1_000_000.0;

/// Days past the next payment date before a trade counts as expired.
pub const EXPIRY_GRACE_DAYS: u64 = 30;

/// Sector label for the risk rules.
pub const SECTOR_PUBLIC: &str = "Public";
/// Sector label for the risk rules.
pub const SECTOR_PRIVATE: &str = "Private";

fn matches_rule(category: Category, trade: &Trade, reference_date: NaiveDate) -> bool {
    match category {
        Category::Expired => trade
            .next_payment_date
            .checked_add_days(Days::new(EXPIRY_GRACE_DAYS))
            // A cutoff past NaiveDate::MAX can never be exceeded.
            .is_some_and(|cutoff| reference_date > cutoff),
        Category::HighRisk => {
            trade.value > HIGH_VALUE_THRESHOLD && trade.client_sector == SECTOR_PRIVATE
        }
        Category::MediumRisk => {
            trade.value > HIGH_VALUE_THRESHOLD && trade.client_sector == SECTOR_PUBLIC
        }
        Category::Pep => trade.is_politically_exposed,
        Category::NotCategorised => true,
    }
}

/// Assign a category to a trade.
///
/// Evaluates [`Category::PRIORITY`] in order and returns the first rule
/// that matches, falling back to [`Category::NotCategorised`]. Pure: no
/// state is read or written beyond the arguments.
pub fn classify(trade: &Trade, reference_date: NaiveDate) -> Category {
    Category::PRIORITY
        .into_iter()
        .find(|&category| matches_rule(category, trade, reference_date))
        .unwrap_or(Category::NotCategorised)
}

/// Counters describing one screening run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreeningStats {
    /// Total trades classified.
    pub total_trades: u64,
    /// Trades categorized EXPIRED.
    pub expired: u64,
    /// Trades categorized HIGHRISK.
    pub high_risk: u64,
    /// Trades categorized MEDIUMRISK.
    pub medium_risk: u64,
    /// Trades categorized PEP.
    pub pep: u64,
    /// Trades no rule matched.
    pub not_categorised: u64,
    /// Malformed lines skipped (skip policy only).
    pub skipped: u64,
}

impl ScreeningStats {
    /// Record one classified trade.
    pub fn record(&mut self, category: Category) {
        self.total_trades += 1;
        match category {
            Category::Expired => self.expired += 1,
            Category::HighRisk => self.high_risk += 1,
            Category::MediumRisk => self.medium_risk += 1,
            Category::Pep => self.pep += 1,
            Category::NotCategorised => self.not_categorised += 1,
        }
    }

    /// Record one skipped line.
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Reset statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-run classifier holding the shared reference date.
///
/// Rules themselves are stateless; this wrapper pins the reference date
/// once per run and accumulates [`ScreeningStats`] across calls.
pub struct TradeClassifier {
    reference_date: NaiveDate,
    stats: ScreeningStats,
}

impl TradeClassifier {
    /// Create a classifier for one run.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            stats: ScreeningStats::default(),
        }
    }

    /// The run's reference date.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Classify a single trade and record it in the statistics.
    pub fn classify(&mut self, trade: &Trade) -> Category {
        let category = classify(trade, self.reference_date);
        self.stats.record(category);
        category
    }

    /// Get run statistics.
    pub fn stats(&self) -> &ScreeningStats {
        &self.stats
    }

    /// Note a skipped line in the statistics.
    pub fn record_skip(&mut self) {
        self.stats.record_skip();
    }

    /// Consume the classifier and return the accumulated statistics.
    pub fn into_stats(self) -> ScreeningStats {
        self.stats
    }
}
