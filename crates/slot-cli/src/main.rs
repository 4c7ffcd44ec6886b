//! `slotfind` CLI: find common free time across weekly CSV schedules.
//!
//! ## Usage
//!
//! ```sh
//! # Scan the current directory for *.csv schedules (08:00-22:00, Mon-Fri, >= 1 hour)
//! slotfind
//!
//! # Explicit files and directories
//! slotfind resources/ extra/carol.csv
//!
//! # Office hours, 30-minute slots, two days
//! slotfind resources/ --day-start 09:00 --day-end 17:00 --min-minutes 30 --days Mon,Wed
//!
//! # Load settings from a JSON file, emit JSON
//! slotfind resources/ --config slots.json --format json -o free.json
//!
//! # Debug logging to stderr
//! slotfind resources/ -v
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Weekday;
use clap::{Parser, ValueEnum};
use slot_engine::report::{render_json, render_text};
use slot_engine::schedule::parse_day;
use slot_engine::{find_common_free_time, Interval, Schedule, SlotConfig, TimeOfDay};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "slotfind",
    version,
    about = "Find common free time slots across weekly CSV schedules"
)]
struct Cli {
    /// CSV schedule files, or directories scanned for *.csv
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// JSON configuration file (window, min_free_minutes, days)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start of the daily window (HH:MM)
    #[arg(long)]
    day_start: Option<TimeOfDay>,

    /// End of the daily window (HH:MM)
    #[arg(long)]
    day_end: Option<TimeOfDay>,

    /// Minimum free slot length in minutes
    #[arg(long)]
    min_minutes: Option<u16>,

    /// Comma-separated days to evaluate, in output order (e.g. Monday,Tue)
    #[arg(long, value_delimiter = ',', value_parser = parse_weekday)]
    days: Option<Vec<Weekday>>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    tracing::debug!(
        window = %config.window,
        min_free_minutes = config.min_free_minutes,
        days = config.days.len(),
        "resolved configuration"
    );

    let files = discover_sources(&cli.paths)?;
    let schedules = files
        .iter()
        .map(|path| {
            Schedule::from_path(path)
                .with_context(|| format!("Failed to read schedule: {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(sources = schedules.len(), "loaded schedules");

    let availability = find_common_free_time(&schedules, &config);

    let rendered = match cli.format {
        Format::Text => render_text(&availability, &config),
        Format::Json => {
            let mut json =
                render_json(&availability, &config).context("Failed to render JSON report")?;
            json.push('\n');
            json
        }
    };

    write_output(cli.output.as_deref(), &rendered)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_weekday(s: &str) -> Result<Weekday, String> {
    parse_day(s).map_err(|e| e.to_string())
}

/// Start from the config file (or the defaults), then apply command-line overrides.
fn build_config(cli: &Cli) -> Result<SlotConfig> {
    let mut config = match &cli.config {
        Some(path) => SlotConfig::from_path(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => SlotConfig::default(),
    };

    if cli.day_start.is_some() || cli.day_end.is_some() {
        let start = cli.day_start.unwrap_or(config.day_start());
        let end = cli.day_end.unwrap_or(config.day_end());
        config.window = Interval::new(start, end).context("Invalid day window")?;
    }
    if let Some(min) = cli.min_minutes {
        config.min_free_minutes = min;
    }
    if let Some(days) = &cli.days {
        config.days = days.clone();
    }

    Ok(config)
}

/// Expand each path into schedule files. Directories contribute their `*.csv`
/// entries (non-recursive, sorted by name).
fn discover_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            let entries = std::fs::read_dir(path)
                .with_context(|| format!("Failed to read directory: {}", path.display()))?;
            for entry in entries {
                let entry_path = entry
                    .with_context(|| format!("Failed to read directory: {}", path.display()))?
                    .path();
                if entry_path.is_file() && is_csv(&entry_path) {
                    found.push(entry_path);
                }
            }
            found.sort();
            if found.is_empty() {
                tracing::warn!(dir = %path.display(), "no CSV schedules found");
            }
            files.extend(found);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            anyhow::bail!("No such file or directory: {}", path.display());
        }
    }

    Ok(files)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
