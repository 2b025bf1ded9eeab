//! Output formatting and persistence for interval statistics.
//!
//! Supports pretty-printing, JSON serialization, and CSV tables for the
//! bar chart (intervals) and line chart (samples).

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::types::{IntervalStatistic, Sample};
use crate::stats::IntervalReport;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;

const INTERVAL_HEADERS: &[&str] = &[
    "Station Pair",
    "Average Noise (dBA)",
    "Maximum Noise (dBA)",
];
const SAMPLE_HEADERS: &[&str] = &["distance", "dB", "speed"];

/// Logs an interval report using Rust's debug pretty-print format.
pub fn print_pretty(report: &IntervalReport) {
    debug!("{:#?}", report);
}

/// Logs an interval report as pretty-printed JSON.
pub fn print_json(report: &IntervalReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes interval statistics as a CSV table with headers, replacing `path`.
pub fn write_intervals(path: &str, intervals: &[IntervalStatistic]) -> Result<()> {
    debug!(path, rows = intervals.len(), "Writing interval CSV");
    let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
    write_table(file, INTERVAL_HEADERS, intervals)
}

/// Writes samples as a `distance,dB,speed` CSV table, replacing `path`.
pub fn write_samples(path: &str, samples: &[Sample]) -> Result<()> {
    debug!(path, rows = samples.len(), "Writing sample CSV");
    let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
    write_table(file, SAMPLE_HEADERS, samples)
}

/// Serializes rows as CSV into any writer.
///
/// The header row comes from `T`'s field names; `headers` is only written
/// when there are no rows to derive it from.
pub fn write_table<W: Write, T: Serialize>(
    writer: W,
    headers: &[&str],
    rows: &[T],
) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    if rows.is_empty() {
        writer.write_record(headers)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn intervals() -> Vec<IntervalStatistic> {
        vec![
            IntervalStatistic {
                pair_label: "DPO - LBB".to_string(),
                average_decibel: 70.0,
                maximum_decibel: 72.5,
                sample_count: 2,
            },
            IntervalStatistic {
                pair_label: "LBB - FTW".to_string(),
                average_decibel: 0.0,
                maximum_decibel: 0.0,
                sample_count: 0,
            },
        ]
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let report = IntervalReport::from_intervals(3, 2, intervals(), 0.0);
        print_pretty(&report);
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = IntervalReport::from_intervals(3, 2, intervals(), 0.0);
        print_json(&report).unwrap();
    }

    #[test]
    fn test_interval_table_uses_chart_headers() {
        let mut buf = Vec::new();
        write_table(&mut buf, INTERVAL_HEADERS, &intervals()).unwrap();

        let content = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = content.lines().collect();

        assert_eq!(
            lines[0],
            "Station Pair,Average Noise (dBA),Maximum Noise (dBA)"
        );
        assert_eq!(lines[1], "DPO - LBB,70.0,72.5");
        assert_eq!(lines[2], "LBB - FTW,0.0,0.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_interval_table_still_has_headers() {
        let path = temp_path("station_noise_test_empty_intervals.csv");
        let _ = fs::remove_file(&path);

        write_intervals(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines,
            vec!["Station Pair,Average Noise (dBA),Maximum Noise (dBA)"]
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_sample_table_still_has_headers() {
        let mut buf = Vec::new();
        write_table::<_, Sample>(&mut buf, SAMPLE_HEADERS, &[]).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "distance,dB,speed\n");
    }

    #[test]
    fn test_write_samples_replaces_file() {
        let path = temp_path("station_noise_test_samples.csv");
        let _ = fs::remove_file(&path);

        let samples = vec![Sample {
            distance: 12.5,
            decibel: 71.0,
            speed: 40.0,
        }];
        write_samples(&path, &samples).unwrap();
        write_samples(&path, &samples).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["distance,dB,speed", "12.5,71.0,40.0"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_intervals_creates_file() {
        let path = temp_path("station_noise_test_intervals.csv");
        let _ = fs::remove_file(&path);

        write_intervals(&path, &intervals()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Station Pair,"));

        fs::remove_file(&path).unwrap();
    }
}
