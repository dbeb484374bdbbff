//! Time-derived display state: greeting, market status, screen-awake window
//! and the clock string.
//!
//! Nothing here is remembered between calls. Each value is a pure function
//! of the local time in the reference zone, and each has a fixed fallback
//! for when the clock cannot be read:
//!
//! | Value         | Clock unavailable |
//! |---------------|-------------------|
//! | greeting      | `"Hello"`         |
//! | awake         | `true`            |
//! | market status | `"Market closed"` |
//! | clock string  | `"--:--"`         |

use std::fmt;

use chrono::Weekday;
use chrono_tz::Tz;

use crate::clock::{Clock, LocalTime, NEW_YORK, SystemClock};

/// Clock string shown when no time is available.
pub const NO_TIME: &str = "--:--";

const OPEN_MINUTE: u32 = 9 * 60 + 30;
const CLOSE_MINUTE: u32 = 16 * 60;

/// Time-of-day salutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
    /// Neutral form used when the time is unknown
    Hello,
}

impl Greeting {
    /// 04:00–13:59 morning, 14:00–19:59 afternoon, otherwise evening.
    pub fn at(time: Option<LocalTime>) -> Self {
        match time.map(|t| t.hour) {
            None => Greeting::Hello,
            Some(4..=13) => Greeting::Morning,
            Some(14..=19) => Greeting::Afternoon,
            Some(_) => Greeting::Evening,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
            Greeting::Hello => "Hello",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the exchange is in its regular session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarketStatus {
    Open,
    Closed,
}

impl MarketStatus {
    /// Open Monday to Friday from 09:30 through 16:00 inclusive.
    ///
    /// Holidays are not modelled. Unknown time reads as closed.
    pub fn at(time: Option<LocalTime>) -> Self {
        let Some(t) = time else {
            return MarketStatus::Closed;
        };
        if matches!(t.weekday, Weekday::Sat | Weekday::Sun) {
            return MarketStatus::Closed;
        }
        if (OPEN_MINUTE..=CLOSE_MINUTE).contains(&t.minute_of_day()) {
            MarketStatus::Open
        } else {
            MarketStatus::Closed
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == MarketStatus::Open
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarketStatus::Open => "Market open",
            MarketStatus::Closed => "Market closed",
        }
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hours during which the screen stays on.
///
/// The reference-zone hour is shifted by `shift_hours` (mod 24) into the
/// viewer's zone and the screen is awake for `wake_hour..=sleep_hour` there.
/// Any shift is accepted; only its remainder mod 24 matters.
/// The default shift of 21 takes US Eastern to US Pacific.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwakeWindow {
    pub shift_hours: u32,
    pub wake_hour: u32,
    pub sleep_hour: u32,
}

impl Default for AwakeWindow {
    fn default() -> Self {
        Self {
            shift_hours: 21,
            wake_hour: 6,
            sleep_hour: 22,
        }
    }
}

impl AwakeWindow {
    /// True if the screen should be on. Unknown time reads as awake so a
    /// clock fault never leaves the display dark.
    pub fn is_awake(&self, time: Option<LocalTime>) -> bool {
        let Some(t) = time else {
            return true;
        };
        let hour = (t.hour % 24 + self.shift_hours % 24) % 24;
        (self.wake_hour..=self.sleep_hour).contains(&hour)
    }
}

/// `"HH:MM"`, or [`NO_TIME`] if the time is unknown.
pub fn clock_string(time: Option<LocalTime>) -> String {
    match time {
        Some(t) => t.to_string(),
        None => NO_TIME.to_string(),
    }
}

/// Everything the display needs from the clock, from a single reading.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayState {
    pub time: Option<LocalTime>,
    pub greeting: Greeting,
    pub awake: bool,
    pub market: MarketStatus,
    pub clock: String,
}

impl DisplayState {
    pub fn from_local(time: Option<LocalTime>, window: &AwakeWindow) -> Self {
        Self {
            time,
            greeting: Greeting::at(time),
            awake: window.is_awake(time),
            market: MarketStatus::at(time),
            clock: clock_string(time),
        }
    }
}

/// Clock + reference zone + awake window.
///
/// The single-value accessors each read the clock on their own; use
/// [`snapshot`](Self::snapshot) when all four values must agree.
#[derive(Clone, Debug)]
pub struct MarketClock<C: Clock = SystemClock> {
    clock: C,
    zone: Tz,
    window: AwakeWindow,
}

impl Default for MarketClock<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock, NEW_YORK, AwakeWindow::default())
    }
}

impl<C: Clock> MarketClock<C> {
    pub fn new(clock: C, zone: Tz, window: AwakeWindow) -> Self {
        Self {
            clock,
            zone,
            window,
        }
    }

    /// Eastern-time market clock with the default awake window.
    pub fn eastern(clock: C) -> Self {
        Self::new(clock, NEW_YORK, AwakeWindow::default())
    }

    /// Current reference-zone time, if the clock is readable.
    pub fn local_time(&self) -> Option<LocalTime> {
        LocalTime::read(&self.clock, self.zone)
    }

    pub fn greeting(&self) -> Greeting {
        Greeting::at(self.local_time())
    }

    pub fn is_awake(&self) -> bool {
        self.window.is_awake(self.local_time())
    }

    pub fn market_status(&self) -> MarketStatus {
        MarketStatus::at(self.local_time())
    }

    pub fn clock_string(&self) -> String {
        clock_string(self.local_time())
    }

    /// Zone abbreviation in force now ("EST", "EDT"), if the clock is readable.
    pub fn abbreviation(&self) -> Option<String> {
        self.clock
            .now_utc()
            .map(|utc| utc.with_timezone(&self.zone).format("%Z").to_string())
    }

    pub fn snapshot(&self) -> DisplayState {
        DisplayState::from_local(self.local_time(), &self.window)
    }
}
