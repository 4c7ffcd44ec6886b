//! Run configuration: the day window, the minimum free duration and the days to evaluate.

use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interval::Interval;
use crate::time::TimeOfDay;

/// Default window start, 08:00.
pub const DEFAULT_DAY_START: u16 = 8 * 60;
/// Default window end, 22:00.
pub const DEFAULT_DAY_END: u16 = 22 * 60;
/// Free gaps shorter than an hour are not reported by default.
pub const DEFAULT_MIN_FREE_MINUTES: u16 = 60;

/// Fixed parameters for one run.
///
/// Deserializes from JSON such as
/// `{"window": {"start": "09:00", "end": "17:00"}, "min_free_minutes": 30, "days": ["Monday"]}`.
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Span of the day in which free time is meaningful.
    pub window: Interval,
    /// Free slots shorter than this are discarded.
    pub min_free_minutes: u16,
    /// Days to evaluate, in output order.
    pub days: Vec<Weekday>,
}

impl Default for SlotConfig {
    fn default() -> Self {
        SlotConfig {
            window: Interval::new_unchecked(
                TimeOfDay::new_unchecked(DEFAULT_DAY_START),
                TimeOfDay::new_unchecked(DEFAULT_DAY_END),
            ),
            min_free_minutes: DEFAULT_MIN_FREE_MINUTES,
            days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        }
    }
}

impl SlotConfig {
    pub fn new(window: Interval, min_free_minutes: u16, days: Vec<Weekday>) -> Self {
        SlotConfig {
            window,
            min_free_minutes,
            days,
        }
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn day_start(&self) -> TimeOfDay {
        self.window.start()
    }

    pub fn day_end(&self) -> TimeOfDay {
        self.window.end()
    }
}
