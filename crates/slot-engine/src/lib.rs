//! # slot-engine
//!
//! Common free time across multiple weekly schedules.
//!
//! Busy intervals from every source are flattened per day, merged into
//! maximal disjoint spans, and complemented within a fixed day window. Free
//! gaps shorter than a minimum duration are dropped.
//!
//! ```rust
//! use slot_engine::{find_free_slots, Interval, SlotConfig};
//!
//! let busy = vec![
//!     Interval::parse("09:00", "10:00").unwrap(),
//!     Interval::parse("09:30", "11:00").unwrap(),
//! ];
//! let free = find_free_slots(&busy, &SlotConfig::default());
//! assert_eq!(free, vec![
//!     Interval::parse("08:00", "09:00").unwrap(),
//!     Interval::parse("11:00", "22:00").unwrap(),
//! ]);
//! ```
//!
//! ## Modules
//!
//! - [`time`] - `"HH:MM"` ↔ minutes since midnight
//! - [`interval`] - Validated `(start, end)` intervals
//! - [`merge`] - Collapse overlapping/touching busy intervals
//! - [`freetime`] - Free gaps within the day window, filtered by duration
//! - [`schedule`] - Per-source schedules, CSV ingestion, cross-source `combine`
//! - [`availability`] - Per-day pipeline over N schedules
//! - [`config`] - Day window, minimum duration, evaluated days
//! - [`report`] - Text and JSON rendering
//! - [`error`] - Error types

pub mod availability;
pub mod config;
pub mod error;
pub mod freetime;
pub mod interval;
pub mod merge;
pub mod report;
pub mod schedule;
pub mod time;

pub use availability::{find_common_free_time, DayAvailability};
pub use config::SlotConfig;
pub use error::SlotError;
pub use freetime::{candidate_gaps, derive_free_slots, find_first_free_slot, find_free_slots};
pub use interval::Interval;
pub use merge::merge_intervals;
pub use schedule::{combine, Schedule};
pub use time::TimeOfDay;
