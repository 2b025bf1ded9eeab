//! Data types shared by the station interval pipeline.

use serde::{Deserialize, Serialize};

/// One row of the station reference table.
///
/// `code` and `cumulative_distance` are optional because reference tables
/// routinely contain blank cells; pairs touching such a row are skipped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StationRecord {
    pub code: Option<String>,
    #[serde(rename = "station")]
    pub station_name: Option<String>,
    #[serde(rename = "station distance")]
    pub cumulative_distance: Option<f64>,
}

impl StationRecord {
    pub fn new(code: &str, station_name: &str, cumulative_distance: f64) -> Self {
        Self {
            code: Some(code.to_string()),
            station_name: Some(station_name.to_string()),
            cumulative_distance: Some(cumulative_distance),
        }
    }
}

/// Distance interval between two adjacent stations, labelled `"{from} - {to}"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationPair {
    pub label: String,
    pub start_distance: f64,
    pub end_distance: f64,
}

impl StationPair {
    /// Both bounds are inclusive.
    pub fn contains(&self, distance: f64) -> bool {
        self.start_distance <= distance && distance <= self.end_distance
    }
}

/// A single measurement: position along the line, noise level and speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub distance: f64,
    #[serde(rename = "dB")]
    pub decibel: f64,
    pub speed: f64,
}

/// Noise statistics for one station pair.
///
/// Serializes to the three bar-chart columns. `sample_count` is kept out of
/// the serialized form; it is zero exactly when both readings are the `0`
/// placeholder for an interval without samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalStatistic {
    #[serde(rename = "Station Pair")]
    pub pair_label: String,
    #[serde(rename = "Average Noise (dBA)")]
    pub average_decibel: f64,
    #[serde(rename = "Maximum Noise (dBA)")]
    pub maximum_decibel: f64,
    #[serde(skip)]
    pub sample_count: usize,
}

impl IntervalStatistic {
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }
}

/// Samples falling inside one station pair's interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSamples {
    pub label: String,
    pub samples: Vec<Sample>,
}
