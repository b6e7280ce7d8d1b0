//! Data structure for rose plot information sent from the refresh tick to the drawing thread

use crate::geometry::{BinGeometry, BinSegment};
use crate::histogram::CircularHistogram;
use crate::summary::StatSummary;
use crate::{DEFAULT_NUM_BINS, DEFAULT_REFERENCE};

#[derive(Debug, Clone, PartialEq)]
pub struct RoseSnapshot {
    /// Number of observations in each bin, in bin index order
    pub bin_counts: Vec<usize>,
    /// Pie segment angles on the display axis, one per bin
    pub segments: Vec<BinSegment>,
    /// The largest entry in `bin_counts`, zero when there are no observations
    pub max_count: usize,
    /// Rounded statistics for the labels
    pub summary: StatSummary,
    /// Reference angle in radians
    pub reference: f64,
}

impl Default for RoseSnapshot {
    fn default() -> Self {
        Self {
            bin_counts: vec![0; DEFAULT_NUM_BINS],
            segments: BinGeometry::new(DEFAULT_NUM_BINS).segments().to_vec(),
            max_count: 0,
            summary: StatSummary::default(),
            reference: DEFAULT_REFERENCE,
        }
    }
}

impl RoseSnapshot {
    pub fn from_histogram(histogram: &CircularHistogram) -> Self {
        Self {
            bin_counts: histogram.bin_counts().to_vec(),
            segments: histogram.geometry().segments().to_vec(),
            max_count: histogram.max_bin_count(),
            summary: histogram.summary(),
            reference: histogram.reference(),
        }
    }

    pub fn num_bins(&self) -> usize {
        self.bin_counts.len()
    }

    /// The radius of a bin's pie segment relative to the largest one, in `[0, 1]`. Zero for empty
    /// bins and for bins that don't exist.
    pub fn radius_fraction(&self, bin: usize) -> f64 {
        match self.bin_counts.get(bin) {
            Some(&count) if self.max_count > 0 => count as f64 / self.max_count as f64,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_empty_histogram() {
        let snapshot = RoseSnapshot::default();
        assert_eq!(snapshot.num_bins(), DEFAULT_NUM_BINS);
        assert_eq!(snapshot.segments.len(), DEFAULT_NUM_BINS);
        assert_eq!(snapshot.max_count, 0);

        // The default snapshot matches an empty default histogram
        assert_eq!(snapshot, RoseSnapshot::from_histogram(&CircularHistogram::default()));
    }

    #[test]
    fn built_from_histogram() {
        let mut histogram = CircularHistogram::new(4, 0.0).unwrap();
        for angle in [0.1, 0.2, 0.3, 2.0] {
            histogram.insert(angle).unwrap();
        }

        let snapshot = RoseSnapshot::from_histogram(&histogram);
        assert_eq!(snapshot.bin_counts, vec![3, 1, 0, 0]);
        assert_eq!(snapshot.max_count, 3);
        assert_eq!(snapshot.summary.count, 4);
        assert_eq!(snapshot.segments, histogram.geometry().segments());
    }

    #[test]
    fn radius_fraction() {
        let mut histogram = CircularHistogram::new(4, 0.0).unwrap();
        for angle in [0.1, 0.2, 0.3, 0.4, 2.0, 2.1] {
            histogram.insert(angle).unwrap();
        }

        let snapshot = RoseSnapshot::from_histogram(&histogram);
        approx::assert_relative_eq!(snapshot.radius_fraction(0), 1.0);
        approx::assert_relative_eq!(snapshot.radius_fraction(1), 0.5);
        assert_eq!(snapshot.radius_fraction(2), 0.0);
        assert_eq!(snapshot.radius_fraction(4), 0.0);

        // Nothing divides by zero when there are no observations
        assert_eq!(RoseSnapshot::default().radius_fraction(0), 0.0);
    }
}
