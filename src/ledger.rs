//! Trade ledger, owner directory and ownership queries.
//!
//! The ledger is fixed at startup and never mutated. Everything derived from
//! it (owner directory, ticker list) is rebuilt from scratch on each call, so
//! there is no cache to invalidate.

use std::borrow::Cow;
use std::fmt;

use crate::error::ValidationError;
use crate::types::{PerShare, Quantity, UNASSIGNED};

/// Maximum number of distinct owners kept in an [`OwnerDirectory`].
pub const MAX_OWNERS: usize = 10;

/// A single acquired position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade {
    /// Stock symbol ("AAPL", "QQQM", ...)
    pub ticker: Cow<'static, str>,
    /// Price per share at acquisition
    pub buy_price: PerShare,
    /// Signed share count
    pub quantity: Quantity,
    /// Owning person; empty means unassigned/shared
    #[cfg_attr(feature = "serde", serde(default))]
    pub owner: Cow<'static, str>,
}

impl Trade {
    /// Create a trade from static strings. Usable in `const` ledgers.
    pub const fn new(
        ticker: &'static str,
        buy_price: PerShare,
        quantity: Quantity,
        owner: &'static str,
    ) -> Self {
        Self {
            ticker: Cow::Borrowed(ticker),
            buy_price,
            quantity,
            owner: Cow::Borrowed(owner),
        }
    }

    /// Create a trade from runtime strings (e.g. loaded from configuration).
    pub fn owned(
        ticker: impl Into<String>,
        buy_price: PerShare,
        quantity: Quantity,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            ticker: Cow::Owned(ticker.into()),
            buy_price,
            quantity,
            owner: Cow::Owned(owner.into()),
        }
    }

    /// Check the record's field invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ticker.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }
        if !self.buy_price.is_finite() {
            return Err(ValidationError::NonFiniteBuyPrice {
                ticker: self.ticker.to_string(),
            });
        }
        if self.buy_price < 0.0 {
            return Err(ValidationError::NegativeBuyPrice {
                ticker: self.ticker.to_string(),
                price: self.buy_price,
            });
        }
        Ok(())
    }

    /// True if the trade has no owner assigned.
    #[inline]
    pub fn is_unassigned(&self) -> bool {
        self.owner == UNASSIGNED
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{} @ {:.2}", self.ticker, self.quantity, self.buy_price)?;
        if !self.is_unassigned() {
            write!(f, " ({})", self.owner)?;
        }
        Ok(())
    }
}

/// The built-in ledger used when no configuration supplies one.
pub const DEFAULT_TRADES: &[Trade] = &[
    Trade::new("QQQM", 256.88, 1, "Hayden"),
    Trade::new("AMZN", 235.80, 1, "Kate"),
    Trade::new("AAPL", 233.84, 1, "Kate"),
    Trade::new("RPRX", 39.72, 1, "Nathan"),
];

/// Distinct owner names in first-seen ledger order, bounded in size.
///
/// Owners beyond capacity are not stored; their count is reported in
/// [`dropped`](Self::dropped) so the caller can surface the loss.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OwnerDirectory<'a> {
    names: Vec<&'a str>,
    dropped: usize,
}

impl<'a> OwnerDirectory<'a> {
    /// Build a directory holding at most `capacity` owners.
    pub fn build_with_capacity(trades: &'a [Trade], capacity: usize) -> Self {
        let mut names: Vec<&'a str> = Vec::with_capacity(capacity.min(trades.len()));
        let mut overflow: Vec<&'a str> = Vec::new();

        for trade in trades {
            let name: &'a str = &trade.owner;
            if names.contains(&name) {
                continue;
            }
            if names.len() < capacity {
                names.push(name);
            } else if !overflow.contains(&name) {
                overflow.push(name);
            }
        }

        Self {
            names,
            dropped: overflow.len(),
        }
    }

    /// Owner names, in first-seen order.
    #[inline]
    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    /// Number of distinct owners that did not fit.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True if `owner` is present (exact match).
    pub fn contains(&self, owner: &str) -> bool {
        self.names.iter().any(|n| *n == owner)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().copied()
    }
}

/// Derive the owner directory from `trades` with the default capacity
/// ([`MAX_OWNERS`]).
///
/// The empty owner name is kept as a regular entry.
pub fn build_owner_directory(trades: &[Trade]) -> OwnerDirectory<'_> {
    OwnerDirectory::build_with_capacity(trades, MAX_OWNERS)
}

/// True iff some trade has exactly this owner and exactly this ticker.
pub fn owner_owns_stock(owner: &str, ticker: &str, trades: &[Trade]) -> bool {
    trades.iter().any(|t| t.owner == owner && t.ticker == ticker)
}

/// An immutable list of trades.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    trades: Vec<Trade>,
}

impl Ledger {
    /// Wrap a list of trades. No validation is performed; see [`validate`](Self::validate).
    pub fn new(trades: Vec<Trade>) -> Self {
        Self { trades }
    }

    /// Ledger holding [`DEFAULT_TRADES`].
    pub fn builtin() -> Self {
        Self::new(DEFAULT_TRADES.to_vec())
    }

    /// Validate every trade, reporting the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.trades.iter().try_for_each(Trade::validate)
    }

    #[inline]
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Owner directory with the default capacity.
    pub fn owners(&self) -> OwnerDirectory<'_> {
        build_owner_directory(&self.trades)
    }

    /// See [`owner_owns_stock`].
    pub fn owns(&self, owner: &str, ticker: &str) -> bool {
        owner_owns_stock(owner, ticker, &self.trades)
    }

    /// Distinct tickers in first-seen order (what a quote fetcher must request).
    pub fn tickers(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for trade in &self.trades {
            let ticker: &str = &trade.ticker;
            if !out.contains(&ticker) {
                out.push(ticker);
            }
        }
        out
    }

    /// Trades held by `owner`.
    pub fn trades_of<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a Trade> + 'a {
        self.trades.iter().filter(move |t| t.owner == owner)
    }
}
