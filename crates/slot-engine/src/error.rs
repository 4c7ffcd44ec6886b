//! Error types for slot-engine operations.
//!
//! The interval algebra itself is total; every variant here is raised at the
//! ingestion boundary (time parsing, interval construction, schedule reading)
//! or while loading configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// A wall-clock string was not `HH:MM`, or a minute count fell outside a day.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// An interval whose start lies after its end.
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: String, end: String },

    #[error("Unknown day: {0}")]
    UnknownDay(String),

    /// A schedule row failed validation; `line` is the 1-based physical line
    /// in the file, counting the header and any blank lines.
    #[error("Schedule error at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: Box<SlotError>,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Configuration JSON could not be parsed, or a report could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
