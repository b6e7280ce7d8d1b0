//! Rounded statistics for the text labels next to the plot.

use std::fmt;

use crate::histogram::CircularHistogram;

/// The statistics shown next to the rose plot. The mean is measured against the reference angle,
/// and both angles are rounded to two decimals.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StatSummary {
    /// Number of observations received since the last clear.
    pub count: usize,
    /// Circular mean relative to the reference angle in degrees, in `(-90, 270]`.
    pub mean_deg: f64,
    /// Circular standard deviation in degrees.
    pub std_deg: f64,
}

impl StatSummary {
    pub fn from_histogram(histogram: &CircularHistogram) -> Self {
        Self {
            count: histogram.len(),
            mean_deg: round_hundredths(histogram.circular_mean(true)),
            std_deg: round_hundredths(histogram.circular_std()),
        }
    }

    pub fn count_label(&self) -> String {
        format!("Events received: {}", self.count)
    }

    pub fn mean_label(&self) -> String {
        format!("Mean phase (vs. reference): {}\u{b0}", self.mean_deg)
    }

    pub fn std_label(&self) -> String {
        format!("Standard deviation phase: {}\u{b0}", self.std_deg)
    }
}

impl fmt::Display for StatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.count_label())?;
        writeln!(f, "{}", self.mean_label())?;
        write!(f, "{}", self.std_label())
    }
}

/// Round to two decimals. Adding zero turns a negative zero into a positive one so it doesn't show
/// up as `-0` in the labels.
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}
