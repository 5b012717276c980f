//! Forward / inverse 2D DFT over row-major complex grids.
//!
//! - Separable: 1D FFTs over every row, then over every column (done on a
//!   transposed copy so both passes walk contiguous memory).
//! - Rows of a pass are independent and processed with rayon.
//! - Forward is unnormalized; inverse divides by `w·h`, so
//!   `inverse(forward(x)) ≈ x`.
use super::Spectrum;
use crate::error::ComputeError;
use crate::image::ImageF64;
use rayon::prelude::*;
use rustfft::num_complex::Complex64;
use rustfft::{FftDirection, FftPlanner};

/// Unnormalized forward DFT of a real image.
pub fn forward(image: &ImageF64) -> Result<Spectrum, ComputeError> {
    if image.is_empty() {
        return Err(ComputeError::empty(image.w, image.h));
    }
    let mut spectrum = Spectrum::from_real(image)?;
    transform_in_place(&mut spectrum, FftDirection::Forward);
    Ok(spectrum)
}

/// Inverse DFT scaled by `1 / (w·h)`. Take [`Spectrum::real_part`] when a
/// real image is needed.
pub fn inverse(spectrum: &Spectrum) -> Result<Spectrum, ComputeError> {
    if spectrum.w == 0 || spectrum.h == 0 {
        return Err(ComputeError::empty(spectrum.w, spectrum.h));
    }
    spectrum.check_packed()?;
    let mut out = spectrum.clone();
    transform_in_place(&mut out, FftDirection::Inverse);
    let norm = 1.0 / (out.w * out.h) as f64;
    out.data.par_iter_mut().for_each(|c| *c *= norm);
    Ok(out)
}

fn transform_in_place(spectrum: &mut Spectrum, direction: FftDirection) {
    let (w, h) = (spectrum.w, spectrum.h);
    let mut planner = FftPlanner::<f64>::new();

    let row_fft = planner.plan_fft(w, direction);
    spectrum
        .data
        .par_chunks_mut(w)
        .for_each(|row| row_fft.process(row));

    let col_fft = planner.plan_fft(h, direction);
    let mut columns = transpose(&spectrum.data, w, h);
    columns
        .par_chunks_mut(h)
        .for_each(|col| col_fft.process(col));
    spectrum.data = transpose(&columns, h, w);
}

/// Transpose a `w × h` row-major buffer into an `h × w` one.
fn transpose(data: &[Complex64], w: usize, h: usize) -> Vec<Complex64> {
    let mut out = vec![Complex64::new(0.0, 0.0); w * h];
    for (y, row) in data.chunks_exact(w).enumerate() {
        for (x, &c) in row.iter().enumerate() {
            out[x * h + y] = c;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: usize, h: usize) -> ImageF64 {
        ImageF64::from_fn(w, h, |x, y| ((x * 7 + y * 13) % 17) as f64 + 0.25 * x as f64)
    }

    #[test]
    fn round_trip_recovers_image() {
        for &(w, h) in &[(1, 1), (5, 3), (16, 16), (12, 7)] {
            let img = ramp(w, h);
            let back = inverse(&forward(&img).unwrap()).unwrap().real_part();
            assert_eq!((back.w, back.h), (w, h));
            for (a, b) in img.data.iter().zip(&back.data) {
                assert!(
                    (a - b).abs() <= 1e-6 * a.abs().max(1.0),
                    "round trip mismatch {a} vs {b} for {w}x{h}"
                );
            }
        }
    }

    #[test]
    fn dc_term_is_the_pixel_sum() {
        let img = ramp(6, 4);
        let spec = forward(&img).unwrap();
        let sum: f64 = img.data.iter().sum();
        assert!((spec.get(0, 0).re - sum).abs() < 1e-9);
        assert!(spec.get(0, 0).im.abs() < 1e-9);
    }

    #[test]
    fn single_cosine_lands_on_expected_bins() {
        // cos along x with 4 cycles across 32 columns.
        let (w, h) = (32, 8);
        let img = ImageF64::from_fn(w, h, |x, _| {
            (2.0 * std::f64::consts::PI * 4.0 * x as f64 / w as f64).cos()
        });
        let spec = forward(&img).unwrap();
        let expected = (w * h) as f64 / 2.0;
        assert!((spec.get(0, 4).re - expected).abs() < 1e-9);
        assert!((spec.get(0, w - 4).re - expected).abs() < 1e-9);
        assert!(spec.get(1, 4).norm() < 1e-9);
    }

    #[test]
    fn empty_grid_is_rejected() {
        let img = ImageF64::new(0, 4);
        assert!(matches!(forward(&img), Err(ComputeError::Dimension { .. })));
        assert!(matches!(
            inverse(&Spectrum::new(3, 0)),
            Err(ComputeError::Dimension { .. })
        ));
    }

    #[test]
    fn short_buffers_are_dimension_errors() {
        let img = ImageF64 {
            w: 4,
            h: 4,
            stride: 4,
            data: vec![0.0; 15],
        };
        assert!(matches!(forward(&img), Err(ComputeError::Dimension { .. })));
        let mut spec = Spectrum::new(4, 4);
        spec.data.truncate(10);
        assert!(matches!(inverse(&spec), Err(ComputeError::Dimension { .. })));
    }
}
