//! Quote snapshot files.
//!
//! The fetcher writes one JSON array per refresh cycle:
//!
//! ```json
//! [
//!   {"name": "AAPL", "current_value": 241.5, "one_day": 238.75, "one_week": 233.0, "three_month": 210.0}
//! ]
//! ```

use std::path::Path;

use log::info;
use tickerdeck::Quote;

use crate::error::{Error, Result};

/// Load a quote snapshot from a JSON file.
pub fn load(path: &Path) -> Result<Vec<Quote>> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::QuotesRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let quotes = from_json(&contents)?;
    info!("Loaded {} quotes from {}", quotes.len(), path.display());
    Ok(quotes)
}

/// Parse a quote snapshot from a JSON string.
pub fn from_json(json: &str) -> Result<Vec<Quote>> {
    Ok(serde_json::from_str(json)?)
}
