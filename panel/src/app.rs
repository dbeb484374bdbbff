//! Command implementations shared by the CLI and tests.

use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, info};
use tickerdeck::{Clock, DisplayState, FixedClock, MarketClock, ProfitReport, SystemClock};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::quotes;
use crate::render::{self, Frame};

/// Where "now" comes from: the system clock, or an instant given on the
/// command line.
#[derive(Clone, Copy, Debug)]
pub enum PanelClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl PanelClock {
    /// Parse an RFC 3339 `--at` value; `None` selects the system clock.
    pub fn from_arg(at: Option<&str>) -> Result<Self> {
        match at {
            None => Ok(PanelClock::System(SystemClock)),
            Some(value) => {
                let instant = DateTime::parse_from_rfc3339(value).map_err(|source| {
                    Error::Timestamp {
                        value: value.to_string(),
                        source,
                    }
                })?;
                Ok(PanelClock::Fixed(FixedClock::at(instant.with_timezone(&Utc))))
            }
        }
    }
}

impl Clock for PanelClock {
    fn now_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            PanelClock::System(c) => c.now_utc(),
            PanelClock::Fixed(c) => c.now_utc(),
        }
    }
}

/// Build the market clock described by `config`.
pub fn market_clock<C: Clock>(config: &Config, clock: C) -> Result<MarketClock<C>> {
    let zone = config.zone()?;
    debug!("Reference zone {zone}");
    Ok(MarketClock::new(clock, zone, config.awake_window()))
}

/// Render one frame from the ledger, the quote file and the clock.
pub fn show<C: Clock>(config: &Config, clock: C, quotes_path: &Path) -> Result<Frame> {
    let ledger = config.ledger();
    let quotes = quotes::load(quotes_path)?;
    let market = market_clock(config, clock)?;

    let state = market.snapshot();
    let report = ProfitReport::build(ledger.trades(), &quotes);
    render::warn_gaps(&report);
    info!(
        "{} trades, {} owners, total 1D {:.2} / all-time {:.2}",
        ledger.len(),
        report.owners.len(),
        report.total.one_day,
        report.total.all_time
    );

    Ok(Frame::render(&state, &report, &config.display.shared_label))
}

/// Per-ticker percentage changes from the quote file, in file order.
pub fn changes(quotes_path: &Path) -> Result<Vec<String>> {
    let quotes = quotes::load(quotes_path)?;
    Ok(render::change_lines(&quotes))
}

/// One line per owner in directory order, with the tickers they hold.
pub fn owners(config: &Config) -> Vec<String> {
    let ledger = config.ledger();
    let directory = ledger.owners();
    let mut lines: Vec<String> = directory
        .iter()
        .map(|owner| {
            let tickers: Vec<&str> = ledger.trades_of(owner).map(|t| &*t.ticker).collect();
            let label = if owner.is_empty() {
                config.display.shared_label.as_str()
            } else {
                owner
            };
            format!("{label}: {}", tickers.join(" "))
        })
        .collect();
    if directory.dropped() > 0 {
        lines.push(format!("(+{} more not tracked)", directory.dropped()));
    }
    lines
}

/// The time-derived display state, plus the zone abbreviation when known.
pub fn status<C: Clock>(config: &Config, clock: C) -> Result<(DisplayState, Option<String>)> {
    let market = market_clock(config, clock)?;
    Ok((market.snapshot(), market.abbreviation()))
}

/// Whether `owner` holds `ticker` in the configured ledger.
pub fn owns(config: &Config, owner: &str, ticker: &str) -> bool {
    config.ledger().owns(owner, ticker)
}
