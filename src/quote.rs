//! Live quote snapshots and ticker lookup.

use std::fmt;

/// Time horizon a quote carries a reference price for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Horizon {
    OneDay,
    OneWeek,
    ThreeMonth,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::OneDay, Horizon::OneWeek, Horizon::ThreeMonth];
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Horizon::OneDay => write!(f, "1D"),
            Horizon::OneWeek => write!(f, "1W"),
            Horizon::ThreeMonth => write!(f, "3M"),
        }
    }
}

/// One externally supplied price record for a ticker.
///
/// All prices are per share. The record is read-only to this crate: a fresh
/// collection is handed in on every refresh cycle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    /// Ticker symbol, compared exactly (case-sensitive)
    pub name: String,
    /// Latest price
    pub current_value: f64,
    /// Price 24 hours ago
    pub one_day: f64,
    /// Price one week ago
    pub one_week: f64,
    /// Price three months ago
    pub three_month: f64,
}

impl Quote {
    /// Create a quote record.
    pub fn new(
        name: impl Into<String>,
        current_value: f64,
        one_day: f64,
        one_week: f64,
        three_month: f64,
    ) -> Self {
        Self {
            name: name.into(),
            current_value,
            one_day,
            one_week,
            three_month,
        }
    }

    /// Reference price at the start of `horizon`.
    #[inline]
    pub fn reference_price(&self, horizon: Horizon) -> f64 {
        match horizon {
            Horizon::OneDay => self.one_day,
            Horizon::OneWeek => self.one_week,
            Horizon::ThreeMonth => self.three_month,
        }
    }

    /// Per-share price change over `horizon`.
    #[inline]
    pub fn change(&self, horizon: Horizon) -> f64 {
        self.current_value - self.reference_price(horizon)
    }

    /// Percentage change over `horizon`, or `None` if the reference price is zero.
    pub fn change_pct(&self, horizon: Horizon) -> Option<f64> {
        let reference = self.reference_price(horizon);
        if reference == 0.0 {
            return None;
        }
        Some(self.change(horizon) / reference * 100.0)
    }
}

/// Find the quote for `ticker` by exact name match.
///
/// Scans in order and returns the first match. Absence is an ordinary
/// outcome (quote not fetched yet, rate-limited, new ticker).
pub fn find_quote<'a>(ticker: &str, quotes: &'a [Quote]) -> Option<&'a Quote> {
    quotes.iter().find(|q| q.name == ticker)
}
