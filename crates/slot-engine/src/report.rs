//! Render availability results as plain text or JSON.

use serde::Serialize;

use crate::availability::DayAvailability;
use crate::config::SlotConfig;
use crate::error::Result;
use crate::interval::Interval;
use crate::schedule::day_name;

/// Line printed for a day without any qualifying free slot.
pub const NO_FREE_SLOTS: &str = "No common free time slots available.";

#[derive(Serialize)]
struct JsonReport<'a> {
    window: &'a Interval,
    min_free_minutes: u16,
    days: &'a [DayAvailability],
}

/// Describe a minimum duration for the report header: `1 hour`, `2 hours`, `45 minutes`.
pub fn describe_minimum(minutes: u16) -> String {
    match minutes {
        60 => "1 hour".to_string(),
        m if m > 0 && m % 60 == 0 => format!("{} hours", m / 60),
        1 => "1 minute".to_string(),
        m => format!("{} minutes", m),
    }
}

/// Render the human-readable report.
///
/// ```text
/// Common Available Time Slots (Intervals of at least 1 hour):
///
/// Monday:
///   08:00 - 09:00
///   11:00 - 22:00
/// ```
pub fn render_text(days: &[DayAvailability], config: &SlotConfig) -> String {
    let mut out = format!(
        "Common Available Time Slots (Intervals of at least {}):\n",
        describe_minimum(config.min_free_minutes)
    );

    for availability in days {
        out.push_str(&format!("\n{}:\n", day_name(availability.day)));
        if availability.free.is_empty() {
            out.push_str(&format!("  {}\n", NO_FREE_SLOTS));
        }
        for slot in &availability.free {
            out.push_str(&format!("  {}\n", slot));
        }
    }

    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(days: &[DayAvailability], config: &SlotConfig) -> Result<String> {
    let report = JsonReport {
        window: &config.window,
        min_free_minutes: config.min_free_minutes,
        days,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
