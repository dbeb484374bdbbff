//! Wall-clock sources and reference-zone local time.

use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;

/// US Eastern time, the zone market hours are judged in.
///
/// The rules come from the tz database compiled into `chrono-tz`, never from
/// the host, so the same instant gives the same local time on every platform.
pub const NEW_YORK: Tz = chrono_tz::America::New_York;

/// Earliest year a device clock is trusted. Before time sync completes the
/// RTC reports a date near the epoch, which must read as "no clock".
pub const MIN_VALID_YEAR: i32 = 2016;

/// A source of the current instant.
///
/// `None` means the clock is unavailable (not yet synchronised, hardware
/// fault). Every consumer has a documented fallback for that case.
pub trait Clock {
    fn now_utc(&self) -> Option<DateTime<Utc>>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_utc(&self) -> Option<DateTime<Utc>> {
        (**self).now_utc()
    }
}

/// The host system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> Option<DateTime<Utc>> {
        validated(Utc::now())
    }
}

/// A clock frozen at a given instant, or permanently unavailable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(Option<DateTime<Utc>>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }

    /// A clock that never produces a reading.
    pub fn unavailable() -> Self {
        Self(None)
    }

    /// Clock set so that `zone` reads the given local wall time.
    ///
    /// A wall time that occurs twice (the repeated hour when daylight time
    /// ends) resolves to its first occurrence, still in daylight time. A wall
    /// time that does not exist (inside the spring-forward gap) or an invalid
    /// date gives an unavailable clock.
    pub fn local(zone: Tz, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Self {
        let instant = zone
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .earliest()
            .map(|local| local.with_timezone(&Utc));
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> Option<DateTime<Utc>> {
        self.0.and_then(validated)
    }
}

fn validated(instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
    (instant.year() >= MIN_VALID_YEAR).then_some(instant)
}

/// The fields of local time the display logic reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalTime {
    /// 0..=23
    pub hour: u32,
    /// 0..=59
    pub minute: u32,
    pub weekday: Weekday,
}

impl LocalTime {
    pub fn new(hour: u32, minute: u32, weekday: Weekday) -> Self {
        debug_assert!(hour < 24 && minute < 60, "invalid time {hour}:{minute}");
        Self {
            hour,
            minute,
            weekday,
        }
    }

    /// Local time in `zone` at `utc`.
    pub fn in_zone(zone: Tz, utc: DateTime<Utc>) -> Self {
        let local = utc.with_timezone(&zone);
        Self {
            hour: local.hour(),
            minute: local.minute(),
            weekday: local.weekday(),
        }
    }

    /// Read `clock` and convert to `zone`; `None` if the clock is unavailable.
    pub fn read(clock: &impl Clock, zone: Tz) -> Option<Self> {
        clock.now_utc().map(|utc| Self::in_zone(zone, utc))
    }

    /// Minutes since local midnight.
    #[inline]
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
