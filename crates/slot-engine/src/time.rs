//! Wall-clock time points as minutes since midnight.
//!
//! `TimeOfDay` is the exact, non-lossy mapping between `"HH:MM"` strings and
//! integer minutes in `[0, 1440)`. It serializes as the `"HH:MM"` string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Number of minutes in one day; the exclusive upper bound of a time point.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time point within a single day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build a time point from minutes since midnight.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTime` if `minutes >= 1440`.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(SlotError::InvalidTime(format!(
                "{} minutes is outside a single day",
                minutes
            )));
        }
        Ok(TimeOfDay(minutes))
    }

    /// Build a time point from an hour (0-23) and a minute (0-59).
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!("{}:{:02}", hour, minute)));
        }
        Ok(TimeOfDay(hour * 60 + minute))
    }

    /// Parse a 24-hour `"HH:MM"` string. Single-digit hours are accepted.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTime(s.to_string());
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;

        let digits = |part: &str| -> Result<u16> {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u16>().map_err(|_| invalid())
        };

        if minutes.len() != 2 {
            return Err(invalid());
        }
        Self::from_hm(digits(hours)?, digits(minutes)?).map_err(|_| invalid())
    }

    /// Caller guarantees `minutes < MINUTES_PER_DAY`.
    pub(crate) const fn new_unchecked(minutes: u16) -> Self {
        TimeOfDay(minutes)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        TimeOfDay::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(s: String) -> Result<Self> {
        TimeOfDay::parse(&s)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> String {
        t.to_string()
    }
}
