use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzers::pairs::skipped_pairs;
use crate::analyzers::types::IntervalStatistic;

/// Summary of one aggregation run over a station table and a measurement run.
#[derive(Debug, Serialize)]
pub struct IntervalReport {
    pub generated_at: DateTime<Utc>,
    pub source: Option<String>,
    pub min_speed: f64,
    pub station_count: usize,
    pub pair_count: usize,
    pub skipped_pairs: usize,
    pub sample_count: usize,
    pub empty_intervals: Vec<String>,
    pub intervals: Vec<IntervalStatistic>,
}

impl IntervalReport {
    pub fn from_intervals(
        station_count: usize,
        sample_count: usize,
        intervals: Vec<IntervalStatistic>,
        min_speed: f64,
    ) -> Self {
        let pair_count = intervals.len();
        let empty_intervals = intervals
            .iter()
            .filter(|i| i.is_empty())
            .map(|i| i.pair_label.clone())
            .collect();

        IntervalReport {
            generated_at: Utc::now(),
            source: None,
            min_speed,
            station_count,
            pair_count,
            skipped_pairs: skipped_pairs(station_count, pair_count),
            sample_count,
            empty_intervals,
            intervals,
        }
    }

    /// Set the dataset the samples were read from
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Loudest interval by maximum reading, ignoring empty intervals.
    pub fn loudest(&self) -> Option<&IntervalStatistic> {
        self.intervals
            .iter()
            .filter(|i| !i.is_empty())
            .max_by(|a, b| a.maximum_decibel.total_cmp(&b.maximum_decibel))
    }
}
