//! TOML configuration loading and validation.

use std::path::Path;

use serde::Deserialize;
use tickerdeck::{AwakeWindow, Ledger, NEW_YORK, Trade, Tz};

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    /// Trade ledger; empty means use the built-in ledger
    #[serde(default)]
    pub trades: Vec<Trade>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// IANA name of the market's reference zone
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_shift")]
    pub awake_shift_hours: u32,
    #[serde(default = "default_wake")]
    pub wake_hour: u32,
    #[serde(default = "default_sleep")]
    pub sleep_hour: u32,
    /// Label shown for trades with no owner
    #[serde(default = "default_shared_label")]
    pub shared_label: String,
}

fn default_timezone() -> String {
    NEW_YORK.name().into()
}
fn default_shift() -> u32 {
    21
}
fn default_wake() -> u32 {
    6
}
fn default_sleep() -> u32 {
    22
}
fn default_shared_label() -> String {
    "Shared".into()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            awake_shift_hours: default_shift(),
            wake_hour: default_wake(),
            sleep_hour: default_sleep(),
            shared_label: default_shared_label(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    fn validate(&self) -> Result<()> {
        for trade in &self.trades {
            trade.validate()?;
        }
        let d = &self.display;
        if d.awake_shift_hours >= 24 {
            return Err(Error::Config("awake_shift_hours must be < 24".into()));
        }
        if d.wake_hour >= 24 || d.sleep_hour >= 24 {
            return Err(Error::Config("wake_hour and sleep_hour must be < 24".into()));
        }
        if d.wake_hour > d.sleep_hour {
            return Err(Error::Config("wake_hour must not be after sleep_hour".into()));
        }
        self.zone()?;
        Ok(())
    }

    /// The configured ledger, or the built-in one if none is configured.
    pub fn ledger(&self) -> Ledger {
        if self.trades.is_empty() {
            Ledger::builtin()
        } else {
            Ledger::new(self.trades.clone())
        }
    }

    /// The reference zone.
    pub fn zone(&self) -> Result<Tz> {
        let name = &self.display.timezone;
        name.parse::<Tz>()
            .map_err(|e| Error::Config(format!("unknown timezone `{name}`: {e}")))
    }

    pub fn awake_window(&self) -> AwakeWindow {
        AwakeWindow {
            shift_hours: self.display.awake_shift_hours,
            wake_hour: self.display.wake_hour,
            sleep_hour: self.display.sleep_hour,
        }
    }
}
