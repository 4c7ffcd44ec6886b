//! Weekly busy schedules and their ingestion from CSV.
//!
//! A schedule file has a header row naming `Day`, `Start Time` and `End Time`
//! columns, one busy interval per row:
//!
//! ```text
//! Day,Start Time,End Time
//! Monday,09:00,10:30
//! Tuesday,13:00,14:00
//! ```
//!
//! Every row is validated here. The merge and free-time code downstream
//! assumes well-formed intervals and never re-checks them.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use chrono::Weekday;
use serde::Deserialize;

use crate::error::{Result, SlotError};
use crate::interval::Interval;

/// One source's busy intervals, keyed by day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    /// Opaque identifier for this source (e.g. the file name).
    pub source: String,
    /// Busy intervals per day, in file order; may overlap.
    pub busy: HashMap<Weekday, Vec<Interval>>,
}

#[derive(Debug, Deserialize)]
struct ScheduleRow {
    #[serde(rename = "Day")]
    day: String,
    #[serde(rename = "Start Time")]
    start: String,
    #[serde(rename = "End Time")]
    end: String,
}

impl Schedule {
    pub fn new(source: impl Into<String>) -> Self {
        Schedule {
            source: source.into(),
            busy: HashMap::new(),
        }
    }

    /// Add a busy interval for `day`.
    pub fn add(&mut self, day: Weekday, interval: Interval) {
        self.busy.entry(day).or_default().push(interval);
    }

    /// Busy intervals recorded for `day`; empty when the day is absent.
    pub fn intervals(&self, day: Weekday) -> &[Interval] {
        self.busy.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of busy intervals across all days.
    pub fn len(&self) -> usize {
        self.busy.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a schedule from CSV data.
    ///
    /// # Errors
    /// Returns `SlotError::Csv` for structural CSV problems (missing columns,
    /// ragged rows). Returns `SlotError::Row` wrapping `InvalidTime`,
    /// `InvalidInterval` or `UnknownDay` for rows that fail validation.
    pub fn from_reader<R: Read>(source: impl Into<String>, mut reader: R) -> Result<Self> {
        let mut schedule = Schedule::new(source);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_slice());

        let headers = rdr.headers()?.clone();
        for record in rdr.records() {
            let record = record?;
            let line = record
                .position()
                .map(|p| physical_line(&data, p.byte()))
                .unwrap_or_default();
            let row: ScheduleRow = record.deserialize(Some(&headers))?;
            let (day, interval) = parse_row(&row).map_err(|e| SlotError::Row {
                line,
                source: Box::new(e),
            })?;
            schedule.add(day, interval);
        }

        tracing::debug!(
            source = %schedule.source,
            intervals = schedule.len(),
            "loaded schedule"
        );
        Ok(schedule)
    }

    /// Read a schedule from a CSV file; the source identifier is the file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = std::fs::File::open(path)?;
        Self::from_reader(source, file)
    }
}

/// 1-based physical line of the record whose position is `offset`.
///
/// The csv reader positions a record right after the previous record's
/// terminator, before any blank lines it skipped, so those are stepped over
/// first.
fn physical_line(data: &[u8], offset: u64) -> u64 {
    let mut start = (offset as usize).min(data.len());
    while matches!(data.get(start), Some(b'\n' | b'\r')) {
        start += 1;
    }
    data[..start].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}

fn parse_row(row: &ScheduleRow) -> Result<(Weekday, Interval)> {
    let day = parse_day(&row.day)?;
    let interval = Interval::parse(&row.start, &row.end)?;
    Ok((day, interval))
}

/// Parse a day name such as `"Monday"` or `"mon"` (case-insensitive).
pub fn parse_day(s: &str) -> Result<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| SlotError::UnknownDay(s.to_string()))
}

/// Full English name of a day, e.g. `"Monday"`.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Flatten each day's busy intervals across all sources.
///
/// The result for a day is the concatenation of that day's intervals from
/// every source, in source order. Days no source mentions are absent.
pub fn combine(sources: &[Schedule]) -> HashMap<Weekday, Vec<Interval>> {
    sources
        .iter()
        .flat_map(|schedule| schedule.busy.iter())
        .fold(HashMap::new(), |mut combined, (day, intervals)| {
            combined
                .entry(*day)
                .or_insert_with(Vec::new)
                .extend_from_slice(intervals);
            combined
        })
}
