//! The circular histogram and its running statistics.

use rustfft::num_complex::Complex64;

use crate::circ::{self, MEAN_DISPLAY_CUTOFF};
use crate::error::HistogramError;
use crate::geometry::BinGeometry;
use crate::summary::StatSummary;
use crate::{DEFAULT_NUM_BINS, DEFAULT_REFERENCE, MAX_BINS};

/// A multiset of phase observations grouped into equal width bins around a reference angle.
///
/// Every observation is canonicalized into `[0, 2π)` relative to a fixed zero when it's inserted,
/// regardless of the current reference angle. The reference angle only affects which bin an
/// observation is counted in and the direction the circular mean is reported against. Changing the
/// bin count or the reference angle re-partitions the stored observations, it never adds or drops
/// any of them and it never touches the resultant.
#[derive(Debug, Clone)]
pub struct CircularHistogram {
    /// Canonical angles in `[0, 2π)`, in insertion order.
    angles: Vec<f64>,
    /// Number of observations per bin under the current bin count and reference angle.
    bin_counts: Vec<usize>,
    geometry: BinGeometry,
    /// The zero direction for binning, in radians.
    reference: f64,
    /// `Σ e^(i·angle)` over all stored angles.
    resultant: Complex64,
}

impl Default for CircularHistogram {
    fn default() -> Self {
        Self::empty(DEFAULT_NUM_BINS, DEFAULT_REFERENCE)
    }
}

impl CircularHistogram {
    /// Create an empty histogram. Fails if `num_bins` is not in `[1, MAX_BINS]` or if `reference`
    /// is not finite.
    pub fn new(num_bins: usize, reference: f64) -> Result<Self, HistogramError> {
        if !(1..=MAX_BINS).contains(&num_bins) {
            return Err(HistogramError::InvalidBinCount(num_bins));
        }
        if !reference.is_finite() {
            return Err(HistogramError::NonFiniteReference(reference));
        }

        Ok(Self::empty(num_bins, reference))
    }

    fn empty(num_bins: usize, reference: f64) -> Self {
        Self {
            angles: Vec::new(),
            bin_counts: vec![0; num_bins],
            geometry: BinGeometry::new(num_bins),
            reference,
            resultant: Complex64::new(0.0, 0.0),
        }
    }

    /// Add a phase observation in radians. Non-finite values are rejected and leave the histogram
    /// unchanged.
    pub fn insert(&mut self, angle: f64) -> Result<(), HistogramError> {
        if !angle.is_finite() {
            return Err(HistogramError::NonFiniteObservation(angle));
        }

        let angle = circ::circ_dist(angle, 0.0);
        let bin = self.geometry.bin_index(angle, self.reference);
        self.bin_counts[bin] += 1;
        self.angles.push(angle);
        self.resultant += Complex64::from_polar(1.0, angle);

        Ok(())
    }

    /// Remove all observations and reset the resultant. The bin count and reference angle are
    /// kept.
    pub fn clear(&mut self) {
        self.angles.clear();
        self.bin_counts.fill(0);
        self.resultant = Complex64::new(0.0, 0.0);
    }

    /// Change the number of bins. Returns `false` without changing anything if `num_bins` is the
    /// current bin count or if it's outside of `[1, MAX_BINS]`.
    pub fn set_num_bins(&mut self, num_bins: usize) -> bool {
        if num_bins == self.num_bins() || !(1..=MAX_BINS).contains(&num_bins) {
            log::debug!("Ignoring bin count {num_bins}");
            return false;
        }

        self.geometry = BinGeometry::new(num_bins);
        self.reorganize();

        true
    }

    /// Change the reference angle in radians. Returns `false` without changing anything if
    /// `reference` is exactly equal to the current reference angle or if it's not finite.
    #[allow(clippy::float_cmp)]
    pub fn set_reference(&mut self, reference: f64) -> bool {
        if reference == self.reference || !reference.is_finite() {
            log::debug!("Ignoring reference angle {reference}");
            return false;
        }

        self.reference = reference;
        self.reorganize();

        true
    }

    /// Recount every stored observation under the current bin count and reference angle.
    fn reorganize(&mut self) {
        self.bin_counts.clear();
        self.bin_counts.resize(self.geometry.num_bins(), 0);
        for &angle in &self.angles {
            let bin = self.geometry.bin_index(angle, self.reference);
            self.bin_counts[bin] += 1;
        }

        log::trace!(
            "Reorganized {} observations into {} bins around {} rad",
            self.angles.len(),
            self.bin_counts.len(),
            self.reference
        );
    }

    /// The number of observations in each bin, in bin index order. Bin `i` holds the observations
    /// that fall into the same bin as `geometry().midpoint(i) + reference()`.
    pub fn bin_counts(&self) -> &[usize] {
        &self.bin_counts
    }

    /// The number of observations in bin `bin`, or `None` if the bin doesn't exist.
    pub fn bin_count(&self, bin: usize) -> Option<usize> {
        self.bin_counts.get(bin).copied()
    }

    /// The largest per-bin count. Zero exactly when the histogram is empty.
    pub fn max_bin_count(&self) -> usize {
        self.bin_counts.iter().copied().max().unwrap_or(0)
    }

    /// The number of stored observations.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// The stored canonical angles in insertion order, in `[0, 2π)`.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn num_bins(&self) -> usize {
        self.geometry.num_bins()
    }

    /// The reference angle in radians.
    pub fn reference(&self) -> f64 {
        self.reference
    }

    pub fn geometry(&self) -> &BinGeometry {
        &self.geometry
    }

    /// The sum of the unit vectors for every stored angle.
    pub fn resultant(&self) -> Complex64 {
        self.resultant
    }

    /// `|resultant| / n`, in `[0, 1]` up to rounding. Zero for an empty histogram.
    pub fn mean_resultant_length(&self) -> f64 {
        if self.angles.is_empty() {
            0.0
        } else {
            self.resultant.norm() / self.angles.len() as f64
        }
    }

    /// The circular mean in degrees, in `(-90, 270]`. Measured against the reference angle when
    /// `use_reference` is set and against zero otherwise. Zero for an empty histogram.
    pub fn circular_mean(&self, use_reference: bool) -> f64 {
        if self.angles.is_empty() {
            return 0.0;
        }

        let reference = if use_reference { self.reference } else { 0.0 };
        circ::circ_dist_with_cutoff(self.resultant.arg(), reference, MEAN_DISPLAY_CUTOFF)
            .to_degrees()
    }

    /// The circular standard deviation `sqrt(-2 ln(r))` in degrees, where `r` is the mean resultant
    /// length. Zero for an empty histogram.
    ///
    /// `r` is clamped to `[f64::EPSILON, 1]`. A fully cancelled resultant (for instance four
    /// equally spaced angles) reports [`max_circular_std()`] instead of infinity, and rounding on
    /// identical angles can't push `r` above one and produce NaN.
    pub fn circular_std(&self) -> f64 {
        if self.angles.is_empty() {
            return 0.0;
        }

        let r = self.mean_resultant_length().clamp(f64::EPSILON, 1.0);
        (-2.0 * r.ln()).sqrt().to_degrees()
    }

    /// The rounded statistics used for display.
    pub fn summary(&self) -> StatSummary {
        StatSummary::from_histogram(self)
    }
}

/// The value [`CircularHistogram::circular_std()`] saturates at when the observations cancel each
/// other out, in degrees. About 486.5°.
pub fn max_circular_std() -> f64 {
    (-2.0 * f64::EPSILON.ln()).sqrt().to_degrees()
}
