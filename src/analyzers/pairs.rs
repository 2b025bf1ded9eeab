use tracing::debug;

use crate::analyzers::types::{StationPair, StationRecord};

/// Builds the interval between every two adjacent stations, in table order.
///
/// A pair is dropped when either station lacks a code or a cumulative
/// distance. Repeated codes and zero-width intervals are kept as they are.
pub fn build_pairs(stations: &[StationRecord]) -> Vec<StationPair> {
    stations
        .windows(2)
        .enumerate()
        .filter_map(|(index, window)| {
            let (from, to) = (&window[0], &window[1]);
            match (
                from.code.as_deref(),
                to.code.as_deref(),
                from.cumulative_distance,
                to.cumulative_distance,
            ) {
                (Some(from_code), Some(to_code), Some(start), Some(end)) => Some(StationPair {
                    label: format!("{from_code} - {to_code}"),
                    start_distance: start,
                    end_distance: end,
                }),
                _ => {
                    debug!(index, "Skipping station pair with missing code or distance");
                    None
                }
            }
        })
        .collect()
}

/// Number of adjacent station pairs dropped by [`build_pairs`].
pub fn skipped_pairs(station_count: usize, pair_count: usize) -> usize {
    station_count.saturating_sub(1).saturating_sub(pair_count)
}
