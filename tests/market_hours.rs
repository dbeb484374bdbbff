//! Market clock scenarios, including behaviour across DST transitions.

use chrono::{Duration, TimeZone, Utc};
use tickerdeck::{
    AwakeWindow, Clock, FixedClock, Greeting, LocalTime, MarketClock, MarketStatus, NEW_YORK,
};

fn eastern(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> MarketClock<FixedClock> {
    MarketClock::eastern(FixedClock::local(NEW_YORK, y, mo, d, h, mi))
}

// === Market status ===

#[test]
fn market_status_scenarios() {
    // 2025-03-11 is a Tuesday, 2025-03-15 a Saturday, 2025-03-10 a Monday
    assert_eq!(eastern(2025, 3, 11, 10, 0).market_status(), MarketStatus::Open);
    assert_eq!(eastern(2025, 3, 11, 16, 1).market_status(), MarketStatus::Closed);
    assert_eq!(eastern(2025, 3, 15, 12, 0).market_status(), MarketStatus::Closed);
    assert_eq!(eastern(2025, 3, 10, 9, 29).market_status(), MarketStatus::Closed);
    assert_eq!(eastern(2025, 3, 10, 9, 30).market_status(), MarketStatus::Open);
}

#[test]
fn market_opens_at_same_eastern_time_across_dst() {
    // 09:30 Eastern is 14:30 UTC in winter and 13:30 UTC in summer
    let winter = MarketClock::eastern(FixedClock::at(
        Utc.with_ymd_and_hms(2025, 1, 14, 14, 30, 0).unwrap(),
    ));
    let summer = MarketClock::eastern(FixedClock::at(
        Utc.with_ymd_and_hms(2025, 7, 15, 13, 30, 0).unwrap(),
    ));
    assert!(winter.market_status().is_open());
    assert!(summer.market_status().is_open());

    let summer_early = MarketClock::eastern(FixedClock::at(
        Utc.with_ymd_and_hms(2025, 7, 15, 13, 29, 0).unwrap(),
    ));
    assert!(!summer_early.market_status().is_open());
}

// === Greeting ===

#[test]
fn greeting_scenarios() {
    assert_eq!(eastern(2025, 3, 11, 5, 0).greeting(), Greeting::Morning);
    assert_eq!(eastern(2025, 3, 11, 15, 0).greeting(), Greeting::Afternoon);
    assert_eq!(eastern(2025, 3, 11, 22, 0).greeting(), Greeting::Evening);
}

// === Clock failure ===

#[test]
fn clock_failure_fallbacks() {
    for clock in [
        FixedClock::unavailable(),
        FixedClock::at(Utc.timestamp_opt(0, 0).unwrap()),
    ] {
        let mc = MarketClock::eastern(clock);
        assert_eq!(mc.greeting().as_str(), "Hello");
        assert!(mc.is_awake());
        assert_eq!(mc.market_status().as_str(), "Market closed");
        assert_eq!(mc.clock_string(), "--:--");
    }
}

// === Awake window ===

#[test]
fn awake_window_follows_shifted_hour() {
    let window = AwakeWindow::default();
    let awake_hours: Vec<u32> = (0..24)
        .filter(|&h| {
            window.is_awake(Some(LocalTime::new(h, 0, chrono::Weekday::Wed)))
        })
        .collect();
    // Eastern 09..=23 and 00..=01 map to Pacific 06..=22
    let expected: Vec<u32> = (0..=1).chain(9..=23).collect();
    assert_eq!(awake_hours, expected);
}

#[test]
fn clock_string_is_eastern_wall_time() {
    let mc = eastern(2025, 11, 20, 7, 5);
    assert_eq!(mc.clock_string(), "07:05");
    assert_eq!(mc.abbreviation().as_deref(), Some("EST"));
}

// === DST transitions ===

#[test]
fn clock_string_across_spring_forward() {
    // 2025-03-09: 01:59 EST is followed by 03:00 EDT
    let start = Utc.with_ymd_and_hms(2025, 3, 9, 6, 59, 0).unwrap();
    let before = MarketClock::eastern(FixedClock::at(start));
    let after = MarketClock::eastern(FixedClock::at(start + Duration::minutes(1)));
    assert_eq!(before.clock_string(), "01:59");
    assert_eq!(before.abbreviation().as_deref(), Some("EST"));
    assert_eq!(after.clock_string(), "03:00");
    assert_eq!(after.abbreviation().as_deref(), Some("EDT"));
}

#[test]
fn clock_string_across_fall_back() {
    // 2025-11-02: 01:59 EDT is followed by 01:00 EST
    let start = Utc.with_ymd_and_hms(2025, 11, 2, 5, 59, 0).unwrap();
    let before = MarketClock::eastern(FixedClock::at(start));
    let after = MarketClock::eastern(FixedClock::at(start + Duration::minutes(1)));
    assert_eq!(before.clock_string(), "01:59");
    assert_eq!(after.clock_string(), "01:00");
    assert_eq!(after.abbreviation().as_deref(), Some("EST"));
}

#[test]
fn dst_dates_follow_us_rules() {
    // Second Sunday of March to first Sunday of November, 10:00 local either side
    let cases = [
        (2016, (3, 13), (11, 6)),
        (2024, (3, 10), (11, 3)),
        (2030, (3, 10), (11, 3)),
    ];
    for (year, (smo, sd), (emo, ed)) in cases {
        let spring = eastern(year, smo, sd, 10, 0);
        let day_before = eastern(year, smo, sd - 1, 10, 0);
        assert_eq!(spring.abbreviation().as_deref(), Some("EDT"), "{year}");
        assert_eq!(day_before.abbreviation().as_deref(), Some("EST"), "{year}");

        let autumn = eastern(year, emo, ed, 10, 0);
        let day_before = eastern(year, emo, ed - 1, 10, 0);
        assert_eq!(autumn.abbreviation().as_deref(), Some("EST"), "{year}");
        assert_eq!(day_before.abbreviation().as_deref(), Some("EDT"), "{year}");
    }
}

#[test]
fn fixed_clock_reports_the_instant() {
    let instant = Utc.with_ymd_and_hms(2025, 6, 2, 18, 45, 0).unwrap();
    assert_eq!(FixedClock::at(instant).now_utc(), Some(instant));
}
