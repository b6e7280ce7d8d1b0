//! Bin layout for the rose plot.
//!
//! Bins are equal width sectors of the circle. A bin's midpoint is measured in the data domain,
//! relative to the histogram's reference angle, while its segment angles are measured on the fixed
//! display axis (clockwise from twelve o'clock) so a renderer can draw pie segments directly.
//! Neither depends on the reference angle, so the geometry only needs to be recomputed when the
//! number of bins changes.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::circ;

/// A single sector of the rose plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinSegment {
    /// The center of the bin in radians, relative to the reference angle. In `(0, 2π)`.
    pub midpoint: f64,
    /// The angle the pie segment starts at on the display axis, in radians.
    pub start: f64,
    /// The angle the pie segment ends at on the display axis, in radians. Always `start` plus the
    /// bin width.
    pub end: f64,
}

/// Midpoints and segment angles for every bin, plus the mapping from angles to bin indices.
#[derive(Debug, Clone, PartialEq)]
pub struct BinGeometry {
    segments: Vec<BinSegment>,
    /// The width of a single bin in radians.
    step: f64,
}

impl BinGeometry {
    /// Compute the geometry for `num_bins` bins. `num_bins` must be at least one, the histogram
    /// validates this before calling.
    pub fn new(num_bins: usize) -> Self {
        debug_assert!(num_bins > 0);

        let step = TAU / num_bins as f64;
        let segments = (0..num_bins)
            .map(|i| {
                let start = circ::circ_dist(FRAC_PI_2, step * (i + 1) as f64);
                BinSegment {
                    midpoint: step * (i as f64 + 0.5),
                    start,
                    end: start + step,
                }
            })
            .collect();

        Self { segments, step }
    }

    pub fn num_bins(&self) -> usize {
        self.segments.len()
    }

    /// The width of a single bin in radians.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn segments(&self) -> &[BinSegment] {
        &self.segments
    }

    /// The midpoint of bin `bin` relative to the reference angle, or `None` if the bin doesn't
    /// exist.
    pub fn midpoint(&self, bin: usize) -> Option<f64> {
        self.segments.get(bin).map(|segment| segment.midpoint)
    }

    /// The bin `angle` falls into when bins are counted from `reference`. Two angles belong to the
    /// same bin exactly when this returns the same index for both.
    #[inline]
    pub fn bin_index(&self, angle: f64, reference: f64) -> usize {
        let num_bins = self.segments.len();
        let dist = circ::circ_dist(angle, reference);
        let bin = (dist * num_bins as f64 / TAU) as usize;

        // `dist` just below 2π can still scale to `num_bins`
        bin.min(num_bins - 1)
    }
}
