//! Station interval aggregation.
//!
//! Station tables are turned into adjacent station pairs, and the measurement
//! stream is mapped onto those pairs to produce per-interval noise statistics.

pub mod filter;
pub mod intervals;
pub mod pairs;
pub mod stations;
pub mod types;
pub mod utility;

pub use filter::{SampleFilter, distance_bounds, filter_samples};
pub use intervals::{compute_intervals, match_samples};
pub use pairs::build_pairs;
pub use types::{IntervalStatistic, PairSamples, Sample, StationPair, StationRecord};
