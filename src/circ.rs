//! Circular distance and angle helpers.

use std::f64::consts::{PI, TAU};

/// The upper end of the range the circular mean is reported in. Means land in `(-π/2, 3π/2]`, or
/// `(-90°, 270°]`, so typical phase values don't wrap around near zero.
pub const MEAN_DISPLAY_CUTOFF: f64 = 3.0 * PI / 2.0;

/// The circular distance from `reference` to `x` in radians, wrapped into `[0, 2π)`.
#[inline]
pub fn circ_dist(x: f64, reference: f64) -> f64 {
    let x_pos = (x - reference) % TAU;
    let x_pos = if x_pos < 0.0 { x_pos + TAU } else { x_pos };

    // Adding 2π to a tiny negative remainder rounds up to exactly 2π
    if x_pos >= TAU {
        0.0
    } else {
        x_pos
    }
}

/// The circular distance from `reference` to `x` in radians, wrapped into `(cutoff - 2π, cutoff]`.
/// `cutoff` should lie in `[0, 2π]`.
#[inline]
pub fn circ_dist_with_cutoff(x: f64, reference: f64, cutoff: f64) -> f64 {
    let x_pos = circ_dist(x, reference);
    if x_pos > cutoff {
        x_pos - TAU
    } else {
        x_pos
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circ_dist_in_range_is_unchanged() {
        approx::assert_relative_eq!(circ_dist(1.0, 0.0), 1.0);
        approx::assert_relative_eq!(circ_dist(0.0, 0.0), 0.0);
    }

    #[test]
    fn circ_dist_wraps_negative_angles() {
        approx::assert_relative_eq!(circ_dist(-PI / 2.0, 0.0), 3.0 * PI / 2.0, epsilon = 1e-12);
        approx::assert_relative_eq!(circ_dist(0.0, 1.0), TAU - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn circ_dist_wraps_multiple_turns() {
        approx::assert_relative_eq!(circ_dist(5.0 * PI, 0.0), PI, epsilon = 1e-12);
        approx::assert_relative_eq!(circ_dist(-7.0 * PI, 0.0), PI, epsilon = 1e-12);
    }

    #[test]
    fn circ_dist_never_returns_two_pi() {
        // The remainder is a tiny negative number here, adding 2π to it rounds to 2π
        let dist = circ_dist(-1e-20, 0.0);
        assert!((0.0..TAU).contains(&dist), "got {dist}");
    }

    #[test]
    fn circ_dist_with_cutoff_range() {
        for i in 0..720 {
            let x = (i as f64 - 360.0).to_radians() * 1.7;
            let dist = circ_dist_with_cutoff(x, 0.3, MEAN_DISPLAY_CUTOFF);
            assert!(
                dist > MEAN_DISPLAY_CUTOFF - TAU && dist <= MEAN_DISPLAY_CUTOFF,
                "{x} mapped to {dist}"
            );
        }
    }

    #[test]
    fn circ_dist_with_cutoff_maps_past_cutoff_to_negative() {
        approx::assert_relative_eq!(
            circ_dist_with_cutoff(7.0 * PI / 4.0, 0.0, MEAN_DISPLAY_CUTOFF),
            -PI / 4.0,
            epsilon = 1e-12
        );
        approx::assert_relative_eq!(
            circ_dist_with_cutoff(MEAN_DISPLAY_CUTOFF, 0.0, MEAN_DISPLAY_CUTOFF),
            MEAN_DISPLAY_CUTOFF,
            epsilon = 1e-12
        );
    }

    #[test]
    fn wrap_degrees_range() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        assert!(wrap_degrees(-1e-14) < 360.0);
    }
}
