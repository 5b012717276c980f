//! Magnitude and phase of a single spectral coefficient.
//!
//! For `c = a + bi` the scaled parts are `ak = 2a` and `bk = -2b`; magnitude
//! is `sqrt(ak² + bk²)` and phase is `atan2(-bk, ak)`. Every magnitude or
//! phase derived from a spectrum in this crate goes through these helpers so
//! thresholds and renderings agree numerically.
use rustfft::num_complex::Complex64;
use std::f64::consts::PI;

/// Scaled real/imaginary parts `(ak, bk)`.
#[inline]
pub fn scaled_parts(c: Complex64) -> (f64, f64) {
    (2.0 * c.re, -2.0 * c.im)
}

#[inline]
pub fn magnitude(c: Complex64) -> f64 {
    let (ak, bk) = scaled_parts(c);
    (ak * ak + bk * bk).sqrt()
}

/// Phase in radians, `(-π, π]`.
#[inline]
pub fn phase(c: Complex64) -> f64 {
    let (ak, bk) = scaled_parts(c);
    let p = (-bk).atan2(ak);
    // atan2 yields -π on the negative real axis when the imaginary part is -0.0
    if p == -PI {
        PI
    } else {
        p
    }
}

/// Phase in degrees, for reports only.
#[inline]
pub fn phase_deg(c: Complex64) -> f64 {
    phase(c).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn magnitude_is_twice_the_modulus() {
        let c = Complex64::new(3.0, -4.0);
        assert!(approx_eq(magnitude(c), 10.0));
        assert!(approx_eq(magnitude(Complex64::new(0.0, 0.0)), 0.0));
    }

    #[test]
    fn magnitude_is_non_negative() {
        for &(re, im) in &[(-1.0, -1.0), (0.5, -7.0), (-3.0, 2.0), (1e-300, -1e-300)] {
            assert!(magnitude(Complex64::new(re, im)) >= 0.0);
        }
    }

    #[test]
    fn phase_follows_the_coefficient_angle() {
        assert!(approx_eq(phase(Complex64::new(1.0, 0.0)), 0.0));
        assert!(approx_eq(
            phase(Complex64::new(0.0, 1.0)),
            std::f64::consts::FRAC_PI_2
        ));
        assert!(approx_eq(phase(Complex64::new(-1.0, 0.0)), PI));
        assert!(approx_eq(phase_deg(Complex64::new(1.0, -1.0)), -45.0));
    }

    #[test]
    fn negative_zero_imaginary_part_stays_in_range() {
        assert_eq!(phase(Complex64::new(-1.0, -0.0)), PI);
        assert_eq!(phase(Complex64::new(-1.0, 0.0)), PI);
        assert!(approx_eq(phase_deg(Complex64::new(-2.0, -0.0)), 180.0));
    }

    #[test]
    fn non_finite_input_propagates() {
        assert!(magnitude(Complex64::new(f64::NAN, 0.0)).is_nan());
        assert!(magnitude(Complex64::new(f64::INFINITY, 1.0)).is_infinite());
    }
}
