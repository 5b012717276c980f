//! Renderings of a spectrum for inspection.
//!
//! Spectra are stored unshifted (DC at the top-left corner). For viewing, the
//! quadrants are swapped so DC sits in the centre, and magnitudes are
//! compressed with `ln(1 + m)` because the DC term dwarfs everything else.
use super::coeff::{magnitude, phase};
use super::Spectrum;
use crate::image::ImageF64;

/// Move index `(0, 0)` to `(h / 2, w / 2)`, wrapping the other quadrants.
pub fn fftshift<T: Copy>(data: &[T], w: usize, h: usize) -> Vec<T> {
    let mut out = data.to_vec();
    for y in 0..h {
        let dy = (y + h / 2) % h;
        for x in 0..w {
            let dx = (x + w / 2) % w;
            out[dy * w + dx] = data[y * w + x];
        }
    }
    out
}

/// Inverse of [`fftshift`]; differs from it only for odd dimensions.
pub fn ifftshift<T: Copy>(data: &[T], w: usize, h: usize) -> Vec<T> {
    let mut out = data.to_vec();
    for y in 0..h {
        let sy = (y + h / 2) % h;
        for x in 0..w {
            let sx = (x + w / 2) % w;
            out[y * w + x] = data[sy * w + sx];
        }
    }
    out
}

/// Centred `ln(1 + magnitude)` image.
pub fn log_magnitude_image(spectrum: &Spectrum) -> ImageF64 {
    let values: Vec<f64> = spectrum
        .data
        .iter()
        .map(|&c| magnitude(c).ln_1p())
        .collect();
    centred(spectrum, values)
}

/// Centred phase image in radians.
pub fn phase_image(spectrum: &Spectrum) -> ImageF64 {
    let values: Vec<f64> = spectrum.data.iter().map(|&c| phase(c)).collect();
    centred(spectrum, values)
}

fn centred(spectrum: &Spectrum, values: Vec<f64>) -> ImageF64 {
    ImageF64 {
        w: spectrum.w,
        h: spectrum.h,
        stride: spectrum.w,
        data: fftshift(&values, spectrum.w, spectrum.h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::num_complex::Complex64;

    #[test]
    fn shift_moves_origin_to_centre() {
        let data: Vec<usize> = (0..12).collect();
        let shifted = fftshift(&data, 4, 3);
        // (0,0) -> (row 1, col 2)
        assert_eq!(shifted[4 + 2], 0);
        assert_eq!(ifftshift(&shifted, 4, 3), data);
    }

    #[test]
    fn log_magnitude_peaks_at_centre() {
        let mut spec = Spectrum::new(4, 4);
        spec.set(0, 0, Complex64::new(100.0, 0.0));
        let img = log_magnitude_image(&spec);
        assert!((img.get(2, 2) - 201.0f64.ln()).abs() < 1e-12);
        assert_eq!(img.get(0, 0), 0.0);
    }

    #[test]
    fn phase_image_is_centred_and_in_range() {
        let mut spec = Spectrum::new(4, 4);
        spec.set(0, 0, Complex64::new(0.0, 3.0));
        spec.set(1, 1, Complex64::new(-5.0, -0.0));
        spec.set(3, 2, Complex64::new(1.0, -1.0));
        let img = phase_image(&spec);
        assert!((img.get(2, 2) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        // (row 1, col 1) -> (x 3, y 3)
        assert_eq!(img.get(3, 3), std::f64::consts::PI);
        // (row 3, col 2) -> (x 0, y 1)
        assert!((img.get(0, 1) + std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        let pi = std::f64::consts::PI;
        assert!(img.data.iter().all(|&p| p > -pi && p <= pi));
    }
}
