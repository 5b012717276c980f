//! Angle utilities for spectral peak geometry (degrees).
//!
//! Grid lines are undirected, so orientations live in `[0°, 180°)`.

/// Folds an `atan2` result in `(-180°, 180°]` onto the half turn by
/// subtracting 180° when the angle reaches 180°.
///
/// Negative inputs are left alone: the peak estimator only ever feeds angles
/// of points with a non-negative row offset, which lie in `[0°, 180°]`.
#[inline]
pub fn fold_half_turn_deg(angle: f64) -> f64 {
    if angle >= 180.0 {
        angle - 180.0
    } else {
        angle
    }
}

/// Direction of the vector `(x, y)` in degrees, folded with
/// [`fold_half_turn_deg`].
#[inline]
pub fn direction_deg(y: f64, x: f64) -> f64 {
    fold_half_turn_deg(y.atan2(x).to_degrees())
}

/// Smallest unsigned difference between two undirected orientations in
/// degrees. Returns a value in `[0°, 90°]`.
#[inline]
pub fn angular_difference_deg(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(180.0);
    if diff > 90.0 {
        180.0 - diff
    } else {
        diff
    }
}
