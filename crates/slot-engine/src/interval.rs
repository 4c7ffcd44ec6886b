//! Busy and free periods within a single day.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// A contiguous period `[start, end]` within one day, with `start <= end`.
///
/// Ordering is lexicographic on `(start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[derive(Deserialize)]
struct RawInterval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawInterval> for Interval {
    type Error = SlotError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Interval::new(raw.start, raw.end)
    }
}

impl Interval {
    /// Build an interval, rejecting `start > end`. Zero-width intervals are allowed.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvalidInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Interval { start, end })
    }

    /// Caller guarantees `start <= end`.
    pub(crate) const fn new_unchecked(start: TimeOfDay, end: TimeOfDay) -> Self {
        Interval { start, end }
    }

    /// Build an interval from two `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Interval::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?)
    }

    /// Build an interval from minutes since midnight.
    pub fn from_minutes(start: u16, end: u16) -> Result<Self> {
        Interval::new(TimeOfDay::from_minutes(start)?, TimeOfDay::from_minutes(end)?)
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Clip this interval to `window`.
    ///
    /// Returns `None` when the interval lies entirely outside the window or
    /// only touches one of its edges.
    pub fn clip_to(&self, window: &Interval) -> Option<Interval> {
        if self.start >= window.end || self.end <= window.start {
            return None;
        }
        Some(Interval {
            start: self.start.max(window.start),
            end: self.end.min(window.end),
        })
    }

    /// Extend the end of this interval; used by the merge accumulator.
    pub(crate) fn extend_to(&mut self, end: TimeOfDay) {
        self.end = self.end.max(end);
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
