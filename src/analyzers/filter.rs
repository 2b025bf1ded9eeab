use crate::analyzers::types::Sample;

/// Restricts the sample table shown on the distance line chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleFilter {
    pub min_speed: f64,
    /// Inclusive `(from, to)` distance window.
    pub distance_range: Option<(f64, f64)>,
}

impl SampleFilter {
    pub fn with_min_speed(mut self, min_speed: f64) -> Self {
        self.min_speed = min_speed;
        self
    }

    pub fn with_distance_range(mut self, from: f64, to: f64) -> Self {
        self.distance_range = Some((from, to));
        self
    }

    pub fn accepts(&self, sample: &Sample) -> bool {
        if sample.speed < self.min_speed {
            return false;
        }
        match self.distance_range {
            Some((from, to)) => from <= sample.distance && sample.distance <= to,
            None => true,
        }
    }
}

/// Returns the samples accepted by `filter`, keeping their input order.
pub fn filter_samples(samples: &[Sample], filter: &SampleFilter) -> Vec<Sample> {
    samples
        .iter()
        .filter(|s| filter.accepts(s))
        .copied()
        .collect()
}

/// Smallest and largest sample distance, or `None` for an empty table.
pub fn distance_bounds(samples: &[Sample]) -> Option<(f64, f64)> {
    let first = samples.first()?.distance;
    Some(samples.iter().fold((first, first), |(lo, hi), s| {
        (lo.min(s.distance), hi.max(s.distance))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Sample> {
        vec![
            Sample {
                distance: 500.0,
                decibel: 72.0,
                speed: 30.0,
            },
            Sample {
                distance: 120.0,
                decibel: 68.0,
                speed: 55.0,
            },
            Sample {
                distance: 900.0,
                decibel: 81.0,
                speed: 75.0,
            },
        ]
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        assert_eq!(
            filter_samples(&samples(), &SampleFilter::default()),
            samples()
        );
    }

    #[test]
    fn test_min_speed_filter_keeps_order() {
        let kept = filter_samples(&samples(), &SampleFilter::default().with_min_speed(50.0));

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].distance, 120.0);
        assert_eq!(kept[1].distance, 900.0);
    }

    #[test]
    fn test_distance_range_is_inclusive() {
        let filter = SampleFilter::default().with_distance_range(120.0, 500.0);
        let kept = filter_samples(&samples(), &filter);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].distance, 500.0);
        assert_eq!(kept[1].distance, 120.0);
    }

    #[test]
    fn test_combined_filters() {
        let filter = SampleFilter::default()
            .with_min_speed(50.0)
            .with_distance_range(0.0, 600.0);

        assert_eq!(filter_samples(&samples(), &filter).len(), 1);
    }

    #[test]
    fn test_distance_bounds() {
        assert_eq!(distance_bounds(&[]), None);
        assert_eq!(distance_bounds(&samples()), Some((120.0, 900.0)));
    }
}
