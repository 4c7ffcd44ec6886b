//! Common free time across N schedules.
//!
//! For each configured day: gather that day's busy intervals from every
//! source, merge them, then derive the free slots within the day window.
//! Days are computed independently of one another.

use chrono::Weekday;
use serde::Serialize;

use crate::config::SlotConfig;
use crate::freetime::derive_free_slots;
use crate::interval::Interval;
use crate::merge::merge_intervals;
use crate::schedule::{combine, day_name, Schedule};

/// Busy and free time for one evaluated day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    #[serde(serialize_with = "serialize_day")]
    pub day: Weekday,
    /// Merged busy intervals (sorted, disjoint, not clipped to the window).
    pub busy: Vec<Interval>,
    /// Free slots within the window meeting the minimum duration.
    pub free: Vec<Interval>,
}

fn serialize_day<S: serde::Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(day_name(*day))
}

/// Compute the common free time of all `sources` for each day in `config.days`.
///
/// Results follow the order of `config.days`. With no sources, or no busy time
/// on a day, the whole window is free (subject to the minimum duration).
pub fn find_common_free_time(sources: &[Schedule], config: &SlotConfig) -> Vec<DayAvailability> {
    let combined = combine(sources);

    config
        .days
        .iter()
        .map(|&day| {
            let busy = merge_intervals(combined.get(&day).map(Vec::as_slice).unwrap_or(&[]));
            let free = derive_free_slots(&busy, config);
            tracing::debug!(
                day = day_name(day),
                busy = busy.len(),
                free = free.len(),
                "computed availability"
            );
            DayAvailability { day, busy, free }
        })
        .collect()
}
