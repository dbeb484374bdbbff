//! Text frame for the display.
//!
//! The frame is a list of fixed-width lines; the display driver draws them
//! top to bottom. All rounding happens here, at presentation time.

use std::fmt;

use log::warn;
use tickerdeck::{DisplayState, Horizon, ProfitReport, ProfitResult, Quote};

/// Width of the owner-name column.
const NAME_WIDTH: usize = 10;
/// Total line width of the header.
const LINE_WIDTH: usize = 32;

/// Lines to draw for one refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    /// A frame with nothing on it (screen off).
    pub fn blank() -> Self {
        Self::default()
    }

    /// Compose the frame for `state` and `report`.
    ///
    /// Returns a blank frame outside the awake window.
    pub fn render(state: &DisplayState, report: &ProfitReport<'_>, shared_label: &str) -> Self {
        if !state.awake {
            return Self::blank();
        }

        let mut lines = Vec::with_capacity(report.owners.len() + 4);
        let greeting = state.greeting.as_str();
        lines.push(format!(
            "{greeting:<width$}{clock}",
            width = LINE_WIDTH - state.clock.len(),
            clock = state.clock
        ));
        lines.push(state.market.as_str().to_string());

        for (owner, result) in &report.owners {
            let name = if owner.is_empty() { shared_label } else { *owner };
            lines.push(profit_line(name, result));
        }
        lines.push(profit_line("Total", &report.total));

        if !report.unpriced.is_empty() {
            lines.push(format!("No quote: {}", report.unpriced.join(" ")));
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn profit_line(name: &str, result: &ProfitResult) -> String {
    let name: String = name.chars().take(NAME_WIDTH).collect();
    format!(
        "{name:<NAME_WIDTH$} {:>10} {:>10}",
        signed(result.one_day),
        signed(result.all_time)
    )
}

/// Two decimals with an explicit sign; negative zero prints as `+0.00`.
pub fn signed(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "+0.00".to_string();
    }
    format!("{rounded:+.2}")
}

/// One line per quote with its percentage change over every horizon.
///
/// A horizon whose reference price is zero shows `n/a`.
pub fn change_lines(quotes: &[Quote]) -> Vec<String> {
    quotes
        .iter()
        .map(|quote| {
            let name: String = quote.name.chars().take(NAME_WIDTH).collect();
            let mut line = format!("{name:<NAME_WIDTH$}");
            for horizon in Horizon::ALL {
                let pct = match quote.change_pct(horizon) {
                    Some(p) => format!("{}%", signed(p)),
                    None => "n/a".to_string(),
                };
                line.push_str(&format!(" {horizon} {pct:>8}"));
            }
            line
        })
        .collect()
}

/// Log conditions the frame cannot show in full.
pub fn warn_gaps(report: &ProfitReport<'_>) {
    if !report.unpriced.is_empty() {
        warn!(
            "No quote for {} ticker(s): {}; counted as zero",
            report.unpriced.len(),
            report.unpriced.join(", ")
        );
    }
    if report.dropped_owners > 0 {
        warn!(
            "{} owner(s) beyond the display limit are not shown individually",
            report.dropped_owners
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickerdeck::{AwakeWindow, LocalTime, Quote, Trade};

    fn state(hour: u32) -> DisplayState {
        DisplayState::from_local(
            Some(LocalTime::new(hour, 15, chrono::Weekday::Tue)),
            &AwakeWindow::default(),
        )
    }

    #[test]
    fn signed_formatting() {
        assert_eq!(signed(5.224), "+5.22");
        assert_eq!(signed(-2.006), "-2.01");
        assert_eq!(signed(-0.001), "+0.00");
        assert_eq!(signed(0.0), "+0.00");
    }

    #[test]
    fn renders_owner_lines() {
        let trades = [
            Trade::new("AAPL", 230.0, 2, "Kate"),
            Trade::new("SPY", 500.0, 1, ""),
            Trade::new("RPRX", 40.0, 1, "Nathan"),
        ];
        let quotes = [
            Quote::new("AAPL", 235.0, 233.0, 0.0, 0.0),
            Quote::new("SPY", 499.0, 501.0, 0.0, 0.0),
        ];
        let report = ProfitReport::build(&trades, &quotes);
        let frame = Frame::render(&state(10), &report, "Shared");

        let lines = frame.lines();
        assert_eq!(lines[0].len(), LINE_WIDTH);
        assert!(lines[0].starts_with("Good morning"));
        assert!(lines[0].ends_with("10:15"));
        assert_eq!(lines[1], "Market open");
        assert!(lines[2].starts_with("Kate"));
        assert!(lines[2].contains("+4.00") && lines[2].contains("+10.00"));
        assert!(lines[3].starts_with("Shared"));
        assert!(lines[3].contains("-2.00") && lines[3].contains("-1.00"));
        assert!(lines[4].starts_with("Nathan") && lines[4].contains("+0.00"));
        assert!(lines[5].starts_with("Total"));
        assert_eq!(lines[6], "No quote: RPRX");
    }

    #[test]
    fn change_lines_cover_every_horizon() {
        let quotes = [
            Quote::new("AMZN", 240.0, 241.0, 230.0, 200.0),
            Quote::new("NEW", 10.0, 8.0, 0.0, 0.0),
        ];
        let lines = change_lines(&quotes);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("AMZN"));
        assert!(lines[0].contains("1D   -0.41%"));
        assert!(lines[0].contains("1W   +4.35%"));
        assert!(lines[0].contains("3M  +20.00%"));
        assert!(lines[1].contains("1D  +25.00%"));
        assert!(lines[1].contains("1W      n/a"));
        assert!(lines[1].ends_with("3M      n/a"));
    }

    #[test]
    fn asleep_renders_blank() {
        let report = ProfitReport::build(&[], &[]);
        // 03:15 Eastern is 00:15 shifted, outside the window
        let frame = Frame::render(&state(3), &report, "Shared");
        assert!(frame.is_blank());
        assert_eq!(frame.to_string(), "");
    }
}
