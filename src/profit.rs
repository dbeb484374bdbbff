//! Profit aggregation: per trade, per owner and portfolio-wide.
//!
//! Every level is a plain sum of trade-level results. A trade whose ticker
//! has no quote contributes exactly zero, so a stale or partial quote fetch
//! never corrupts the totals of the rest of the portfolio.
//!
//! No rounding is applied here; presentation code formats as it sees fit.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use log::debug;
use rustc_hash::FxHashMap;

use crate::ledger::{OwnerDirectory, Trade, build_owner_directory};
use crate::quote::{Quote, find_quote};

/// One-day and all-time profit, in quote currency.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfitResult {
    /// (current - price 24h ago) × quantity
    pub one_day: f64,
    /// (current - buy price) × quantity
    pub all_time: f64,
}

impl ProfitResult {
    pub const ZERO: ProfitResult = ProfitResult {
        one_day: 0.0,
        all_time: 0.0,
    };

    #[inline]
    pub fn new(one_day: f64, all_time: f64) -> Self {
        Self { one_day, all_time }
    }

    /// True if both components are within `eps` of `other`.
    pub fn approx_eq(&self, other: &ProfitResult, eps: f64) -> bool {
        (self.one_day - other.one_day).abs() <= eps
            && (self.all_time - other.all_time).abs() <= eps
    }
}

impl Add for ProfitResult {
    type Output = ProfitResult;

    #[inline]
    fn add(self, rhs: ProfitResult) -> ProfitResult {
        ProfitResult {
            one_day: self.one_day + rhs.one_day,
            all_time: self.all_time + rhs.all_time,
        }
    }
}

impl AddAssign for ProfitResult {
    #[inline]
    fn add_assign(&mut self, rhs: ProfitResult) {
        self.one_day += rhs.one_day;
        self.all_time += rhs.all_time;
    }
}

impl Sum for ProfitResult {
    fn sum<I: Iterator<Item = ProfitResult>>(iter: I) -> Self {
        iter.fold(ProfitResult::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a ProfitResult> for ProfitResult {
    fn sum<I: Iterator<Item = &'a ProfitResult>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Profit of a trade against an already-resolved quote.
#[inline]
pub fn profit_against(trade: &Trade, quote: &Quote) -> ProfitResult {
    let qty = trade.quantity as f64;
    ProfitResult {
        one_day: (quote.current_value - quote.one_day) * qty,
        all_time: (quote.current_value - trade.buy_price) * qty,
    }
}

/// Profit of a single trade, or [`ProfitResult::ZERO`] if its ticker is unquoted.
pub fn trade_profit(trade: &Trade, quotes: &[Quote]) -> ProfitResult {
    match find_quote(&trade.ticker, quotes) {
        Some(quote) => profit_against(trade, quote),
        None => {
            debug!("no quote for {}, counting as zero", trade.ticker);
            ProfitResult::ZERO
        }
    }
}

/// One result per trade, in ledger order.
pub fn per_trade_profit(trades: &[Trade], quotes: &[Quote]) -> Vec<ProfitResult> {
    trades.iter().map(|t| trade_profit(t, quotes)).collect()
}

/// Sum over all trades owned by exactly `owner`.
pub fn owner_profit(owner: &str, trades: &[Trade], quotes: &[Quote]) -> ProfitResult {
    trades
        .iter()
        .filter(|t| t.owner == owner)
        .map(|t| trade_profit(t, quotes))
        .sum()
}

/// Sum over the whole ledger, regardless of owner.
pub fn portfolio_profit(trades: &[Trade], quotes: &[Quote]) -> ProfitResult {
    trades.iter().map(|t| trade_profit(t, quotes)).sum()
}

/// A complete profit breakdown computed in one pass over the ledger.
#[derive(Clone, Debug)]
pub struct ProfitReport<'a> {
    /// One entry per trade, in ledger order
    pub trades: Vec<(&'a Trade, ProfitResult)>,
    /// One entry per owner, in owner-directory order
    pub owners: Vec<(&'a str, ProfitResult)>,
    /// Sum over all trades
    pub total: ProfitResult,
    /// Tickers with no matching quote (distinct, first-seen order)
    pub unpriced: Vec<&'a str>,
    /// Distinct owners left out of `owners` because the directory was full
    pub dropped_owners: usize,
}

impl<'a> ProfitReport<'a> {
    /// Build the report using the default owner directory.
    pub fn build(trades: &'a [Trade], quotes: &[Quote]) -> Self {
        Self::with_directory(trades, &build_owner_directory(trades), quotes)
    }

    /// Build the report against an existing owner directory.
    ///
    /// Trades whose owner is not in the directory still count toward `total`.
    pub fn with_directory(
        trades: &'a [Trade],
        directory: &OwnerDirectory<'a>,
        quotes: &[Quote],
    ) -> Self {
        let slots: FxHashMap<&str, usize> = directory
            .iter()
            .enumerate()
            .map(|(i, name)| (name, i))
            .collect();

        let mut owners: Vec<(&'a str, ProfitResult)> =
            directory.iter().map(|n| (n, ProfitResult::ZERO)).collect();
        let mut per_trade = Vec::with_capacity(trades.len());
        let mut unpriced: Vec<&'a str> = Vec::new();
        let mut total = ProfitResult::ZERO;

        for trade in trades {
            let result = match find_quote(&trade.ticker, quotes) {
                Some(quote) => profit_against(trade, quote),
                None => {
                    let ticker: &'a str = &trade.ticker;
                    if !unpriced.contains(&ticker) {
                        unpriced.push(ticker);
                    }
                    ProfitResult::ZERO
                }
            };

            let owner: &str = &trade.owner;
            if let Some(&slot) = slots.get(owner) {
                owners[slot].1 += result;
            }
            total += result;
            per_trade.push((trade, result));
        }

        Self {
            trades: per_trade,
            owners,
            total,
            unpriced,
            dropped_owners: directory.dropped(),
        }
    }

    /// Aggregate for `owner`, if it is in the directory.
    pub fn owner(&self, owner: &str) -> Option<ProfitResult> {
        self.owners
            .iter()
            .find(|(name, _)| *name == owner)
            .map(|(_, r)| *r)
    }

    /// True if every trade had a quote.
    pub fn fully_priced(&self) -> bool {
        self.unpriced.is_empty()
    }
}
