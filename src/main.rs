//! CLI entry point for the station noise tool.
//!
//! Provides subcommands for computing per-station-pair noise statistics,
//! exporting filtered samples for distance charts, and listing station pairs.

mod infra;

use crate::infra::DatasetConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use station_noise::analyzers::{
    Sample, SampleFilter, StationRecord, build_pairs, compute_intervals, distance_bounds,
    filter_samples, match_samples, pairs::skipped_pairs, stations::north_south_line,
};
use station_noise::{
    output::{print_json, print_pretty, write_intervals, write_samples},
    parser::{parse_samples, parse_stations},
    stats::IntervalReport,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "station_noise")]
#[command(about = "Noise statistics between adjacent stations", long_about = None)]
struct Cli {
    /// JSON file mapping dataset names to CSV paths
    #[arg(long, global = true)]
    datasets: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute average and maximum noise for every station pair
    Intervals {
        /// Measurement CSV path or dataset name
        #[arg(value_name = "SAMPLES")]
        source: String,

        /// Station CSV (defaults to the built-in North-South line)
        #[arg(short, long)]
        stations: Option<String>,

        /// Ignore samples slower than this speed (km/h)
        #[arg(short, long, default_value_t = 0.0)]
        min_speed: f64,

        /// CSV file to write interval statistics to
        #[arg(short, long, default_value = "intervals.csv")]
        output: String,

        /// Also log the full report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Export the filtered sample table for noise/speed over distance charts
    Samples {
        /// Measurement CSV path or dataset name
        #[arg(value_name = "SAMPLES")]
        source: String,

        /// Ignore samples slower than this speed (km/h)
        #[arg(short, long, default_value_t = 0.0)]
        min_speed: f64,

        /// Lower distance bound in metres (inclusive)
        #[arg(long)]
        from: Option<f64>,

        /// Upper distance bound in metres (inclusive)
        #[arg(long)]
        to: Option<f64>,

        /// CSV file to write the filtered samples to
        #[arg(short, long, default_value = "samples.csv")]
        output: String,
    },
    /// List station pairs and their distance intervals
    Pairs {
        /// Station CSV (defaults to the built-in North-South line)
        #[arg(short, long)]
        stations: Option<String>,

        /// Also count the samples falling in each pair
        #[arg(long, value_name = "SAMPLES")]
        samples: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/station_noise.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("station_noise.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let datasets_path = cli
        .datasets
        .or_else(|| std::env::var("STATION_NOISE_DATASETS").ok())
        .unwrap_or_else(|| "datasets.json".to_string());
    let datasets = DatasetConfig::load_optional(&datasets_path)?;
    debug!(path = %datasets_path, entries = datasets.iter().count(), "Dataset config loaded");

    match cli.command {
        Commands::Intervals {
            source,
            stations,
            min_speed,
            output,
            json,
        } => {
            let report = intervals(&datasets, &source, stations.as_deref(), min_speed)?;

            write_intervals(&output, &report.intervals)?;
            print_pretty(&report);
            if json {
                print_json(&report)?;
            }

            if let Some(loudest) = report.loudest() {
                info!(
                    pair = %loudest.pair_label,
                    max_db = loudest.maximum_decibel,
                    "Loudest interval"
                );
            }
            info!(output = %output, rows = report.intervals.len(), "Interval statistics written");
        }
        Commands::Samples {
            source,
            min_speed,
            from,
            to,
            output,
        } => {
            let samples = load_samples(&datasets, &source)?;

            let mut filter = SampleFilter::default().with_min_speed(min_speed);
            if from.is_some() || to.is_some() {
                // An open side of the window falls back to the run's own extent
                let (lo, hi) = distance_bounds(&samples).unwrap_or((0.0, 0.0));
                filter = filter.with_distance_range(from.unwrap_or(lo), to.unwrap_or(hi));
            }

            let kept = filter_samples(&samples, &filter);
            write_samples(&output, &kept)?;

            info!(
                output = %output,
                total = samples.len(),
                kept = kept.len(),
                "Filtered samples written"
            );
        }
        Commands::Pairs { stations, samples } => {
            let table = load_stations(stations.as_deref())?;
            let pairs = build_pairs(&table);

            let matched = samples
                .map(|source| load_samples(&datasets, &source))
                .transpose()?
                .map(|samples| match_samples(&pairs, &samples));

            for (index, pair) in pairs.iter().enumerate() {
                let sample_count = matched.as_ref().map(|m| m[index].samples.len());
                info!(
                    pair = %pair.label,
                    start = pair.start_distance,
                    end = pair.end_distance,
                    sample_count,
                    "Station pair"
                );
            }

            info!(
                stations = table.len(),
                pairs = pairs.len(),
                skipped = skipped_pairs(table.len(), pairs.len()),
                "Station pair summary"
            );
        }
    }

    Ok(())
}

/// Builds station pairs and computes interval statistics for one measurement run.
#[tracing::instrument(skip(datasets))]
fn intervals(
    datasets: &DatasetConfig,
    source: &str,
    stations: Option<&str>,
    min_speed: f64,
) -> Result<IntervalReport> {
    let table = load_stations(stations)?;
    let samples = load_samples(datasets, source)?;

    let pairs = build_pairs(&table);
    if pairs.is_empty() {
        warn!(stations = table.len(), "Station table produced no pairs");
    }

    let intervals = compute_intervals(&pairs, &samples, min_speed);
    let report = IntervalReport::from_intervals(table.len(), samples.len(), intervals, min_speed)
        .with_source(source);

    if !report.empty_intervals.is_empty() {
        warn!(
            empty = report.empty_intervals.len(),
            min_speed, "Some intervals have no samples and report 0 dBA"
        );
    }

    Ok(report)
}

/// Reads a measurement run from a dataset name or a file path.
fn load_samples(datasets: &DatasetConfig, source: &str) -> Result<Vec<Sample>> {
    let path = datasets.resolve(source);
    let bytes = std::fs::read(path).with_context(|| format!("failed to read samples '{path}'"))?;
    let samples = parse_samples(&bytes).with_context(|| format!("invalid samples '{path}'"))?;
    debug!(path, rows = samples.len(), "Samples loaded");
    Ok(samples)
}

/// Reads a station table, falling back to the built-in line.
fn load_stations(path: Option<&str>) -> Result<Vec<StationRecord>> {
    match path {
        Some(path) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("failed to read stations '{path}'"))?;
            Ok(parse_stations(&bytes).with_context(|| format!("invalid stations '{path}'"))?)
        }
        None => Ok(north_south_line()),
    }
}
