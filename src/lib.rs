//! # tickerdeck
//!
//! Portfolio logic for a small desk display: a fixed ledger of trades tagged
//! with their owner, profit figures computed against live quote snapshots,
//! and the time-of-day state that decides when and what to show.
//!
//! ## Features
//!
//! - **Trade ledger**: immutable trades (ticker, buy price, signed quantity, owner)
//! - **Owner directory**: distinct owners in first-seen order, bounded at 10 with overflow count
//! - **Profit aggregation**: one-day and all-time profit per trade, per owner, portfolio-wide
//! - **Graceful gaps**: a ticker with no quote contributes zero instead of failing
//! - **Market clock**: greeting, market open/closed, screen-awake window, `HH:MM` clock
//! - **Bundled zone data**: US Eastern DST from the tz database compiled in via `chrono-tz`, never the host's
//!
//! ## Quick Start
//!
//! ```
//! use tickerdeck::{Quote, Trade, ProfitReport, owner_owns_stock};
//!
//! let trades = [
//!     Trade::new("AMZN", 200.00, 2, "Kate"),
//!     Trade::new("AAPL", 230.00, 1, "Kate"),
//!     Trade::new("QQQM", 250.00, 1, "Hayden"),
//! ];
//! let quotes = [
//!     Quote::new("AMZN", 210.00, 205.00, 0.0, 0.0),
//!     Quote::new("AAPL", 235.00, 236.00, 0.0, 0.0),
//!     // QQQM not fetched yet
//! ];
//!
//! let report = ProfitReport::build(&trades, &quotes);
//! let kate = report.owner("Kate").unwrap();
//! assert_eq!(kate.one_day, 10.0 - 1.0);
//! assert_eq!(kate.all_time, 20.0 + 5.0);
//! assert_eq!(report.owner("Hayden").unwrap().all_time, 0.0);
//! assert_eq!(report.unpriced, ["QQQM"]);
//!
//! assert!(owner_owns_stock("Kate", "AMZN", &trades));
//! assert!(!owner_owns_stock("Kate", "TSLA", &trades));
//! ```
//!
//! ## Market Clock
//!
//! ```
//! use tickerdeck::{FixedClock, MarketClock, MarketStatus, NEW_YORK};
//!
//! // Tuesday 2025-07-15, 16:01 in New York
//! let clock = FixedClock::local(NEW_YORK, 2025, 7, 15, 16, 1);
//! let market = MarketClock::eastern(clock);
//!
//! assert_eq!(market.market_status(), MarketStatus::Closed);
//! assert_eq!(market.greeting().as_str(), "Good afternoon");
//! assert_eq!(market.clock_string(), "16:01");
//!
//! // An unreadable clock degrades to safe defaults
//! let blind = MarketClock::eastern(FixedClock::unavailable()).snapshot();
//! assert_eq!(blind.greeting.as_str(), "Hello");
//! assert!(blind.awake);
//! assert_eq!(blind.market.as_str(), "Market closed");
//! assert_eq!(blind.clock, "--:--");
//! ```

pub mod clock;
mod error;
pub mod ledger;
pub mod market;
pub mod profit;
pub mod quote;
mod types;

// Re-export public API
pub use chrono_tz::Tz;
pub use clock::{Clock, FixedClock, LocalTime, NEW_YORK, SystemClock};
pub use error::ValidationError;
pub use ledger::{
    DEFAULT_TRADES, Ledger, MAX_OWNERS, OwnerDirectory, Trade, build_owner_directory,
    owner_owns_stock,
};
pub use market::{AwakeWindow, DisplayState, Greeting, MarketClock, MarketStatus, clock_string};
pub use profit::{
    ProfitReport, ProfitResult, owner_profit, per_trade_profit, portfolio_profit, trade_profit,
};
pub use quote::{Horizon, Quote, find_quote};
pub use types::{PerShare, Quantity, UNASSIGNED};
