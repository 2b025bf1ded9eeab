use tracing::debug;

use crate::analyzers::types::{IntervalStatistic, PairSamples, Sample, StationPair};
use crate::analyzers::utility::{maximum, mean};

/// Computes average and maximum noise for every station pair.
///
/// A sample counts toward a pair when its distance lies within the pair's
/// inclusive interval and its speed is at least `min_speed`. A sample sitting
/// exactly on a station is therefore counted in both neighbouring pairs.
/// Pairs with no qualifying samples report `0` for both readings.
pub fn compute_intervals(
    pairs: &[StationPair],
    samples: &[Sample],
    min_speed: f64,
) -> Vec<IntervalStatistic> {
    pairs
        .iter()
        .map(|pair| {
            let decibels: Vec<f64> = samples
                .iter()
                .filter(|s| s.speed >= min_speed && pair.contains(s.distance))
                .map(|s| s.decibel)
                .collect();

            if decibels.is_empty() {
                debug!(pair = %pair.label, min_speed, "No samples in interval");
            }

            IntervalStatistic {
                pair_label: pair.label.clone(),
                average_decibel: mean(&decibels),
                maximum_decibel: maximum(&decibels),
                sample_count: decibels.len(),
            }
        })
        .collect()
}

/// Collects, for each pair, the samples inside its interval regardless of speed.
pub fn match_samples(pairs: &[StationPair], samples: &[Sample]) -> Vec<PairSamples> {
    pairs
        .iter()
        .map(|pair| PairSamples {
            label: pair.label.clone(),
            samples: samples
                .iter()
                .filter(|s| pair.contains(s.distance))
                .copied()
                .collect(),
        })
        .collect()
}
