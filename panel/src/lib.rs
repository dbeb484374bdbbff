//! tickerdeck-panel: host-side driver for the tickerdeck display.
//!
//! Loads the trade ledger and display settings from a TOML file, reads a
//! quote snapshot written by the fetcher, and composes the text frame the
//! display draws on each refresh.

pub mod app;
pub mod config;
pub mod error;
pub mod quotes;
pub mod render;
