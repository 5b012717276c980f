//! Magnitude thresholding in frequency space.
//!
//! Every coefficient whose magnitude reaches `fraction · max_mag` is kept
//! verbatim, everything else is zeroed. `max_mag` ignores the DC term so a
//! bright image background never sets the bar; the DC term itself is still
//! thresholded like any other cell.
use crate::error::ComputeError;
use crate::spectrum::{magnitude, Spectrum};
use log::debug;
use serde::Serialize;

/// Spectral coordinate that met the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Survivor {
    pub row: usize,
    pub col: usize,
}

/// Output of [`segment`].
#[derive(Clone, Debug)]
pub struct SegmentedSpectrum {
    /// Input spectrum with every sub-threshold coefficient set to zero.
    pub masked: Spectrum,
    /// Kept coordinates in row-major order.
    pub survivors: Vec<Survivor>,
    /// Largest magnitude outside `(0, 0)`.
    pub peak_magnitude: f64,
    /// `fraction · peak_magnitude`.
    pub threshold: f64,
    /// Off-DC magnitude below which a peak is FFT rounding error.
    pub noise_floor: f64,
}

/// Largest magnitude over all cells except DC. Zero for a 1×1 grid.
pub fn peak_magnitude(spectrum: &Spectrum) -> f64 {
    spectrum
        .data
        .iter()
        .skip(1)
        .map(|&c| magnitude(c))
        .fold(0.0, f64::max)
}

/// Largest off-DC magnitude rounding alone can produce for `spectrum`.
///
/// Scales with the grid size and the DC magnitude, so a constant image of any
/// size stays below it.
pub fn noise_floor(spectrum: &Spectrum) -> f64 {
    let dc = spectrum.data.first().map_or(0.0, |&c| magnitude(c));
    (spectrum.w * spectrum.h) as f64 * f64::EPSILON * dc.max(1.0)
}

/// Threshold `spectrum` at `fraction` of its non-DC peak magnitude.
///
/// `fraction >= 1` is accepted and keeps at most the peak itself. Note that
/// `magnitude < threshold` can never hold when the threshold is zero, so a
/// spectrum without any off-DC energy keeps every coordinate.
pub fn segment(spectrum: &Spectrum, fraction: f64) -> Result<SegmentedSpectrum, ComputeError> {
    if !(fraction >= 0.0) {
        return Err(ComputeError::InvalidFraction(fraction));
    }
    if spectrum.w == 0 || spectrum.h == 0 {
        return Err(ComputeError::empty(spectrum.w, spectrum.h));
    }

    let peak = peak_magnitude(spectrum);
    let threshold = fraction * peak;

    let mut masked = Spectrum::new(spectrum.w, spectrum.h);
    let mut survivors = Vec::new();
    for (i, &c) in spectrum.data.iter().enumerate() {
        if magnitude(c) < threshold {
            continue;
        }
        masked.data[i] = c;
        survivors.push(Survivor {
            row: i / spectrum.w,
            col: i % spectrum.w,
        });
    }

    debug!(
        "segment: peak_mag={:.3} threshold={:.3} survivors={}/{}",
        peak,
        threshold,
        survivors.len(),
        spectrum.data.len()
    );

    Ok(SegmentedSpectrum {
        masked,
        survivors,
        peak_magnitude: peak,
        threshold,
        noise_floor: noise_floor(spectrum),
    })
}

impl SegmentedSpectrum {
    /// True when no coefficient outside DC carries more than rounding noise.
    pub fn is_flat(&self) -> bool {
        !(self.peak_magnitude > self.noise_floor)
    }

    /// Membership test against the row-major survivor list.
    pub fn is_survivor(&self, row: usize, col: usize) -> bool {
        self.survivors
            .binary_search_by(|s| (s.row, s.col).cmp(&(row, col)))
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF64;
    use crate::spectrum::forward;
    use rustfft::num_complex::Complex64;

    fn spectrum_from(w: usize, h: usize, values: &[(usize, usize, f64)]) -> Spectrum {
        let mut spec = Spectrum::new(w, h);
        for &(r, c, v) in values {
            spec.set(r, c, Complex64::new(v, 0.0));
        }
        spec
    }

    #[test]
    fn dc_is_excluded_from_the_peak() {
        let spec = spectrum_from(4, 4, &[(0, 0, 1000.0), (1, 2, 10.0), (3, 1, 4.0)]);
        let seg = segment(&spec, 0.4).unwrap();
        // magnitudes carry the factor two
        assert_eq!(seg.peak_magnitude, 20.0);
        assert_eq!(seg.threshold, 8.0);
        assert_eq!(
            seg.survivors,
            vec![
                Survivor { row: 0, col: 0 },
                Survivor { row: 1, col: 2 },
                Survivor { row: 3, col: 1 }
            ]
        );
    }

    #[test]
    fn dc_below_threshold_is_zeroed() {
        let spec = spectrum_from(4, 4, &[(0, 0, 1.0), (2, 2, 10.0)]);
        let seg = segment(&spec, 0.4).unwrap();
        assert_eq!(seg.masked.get(0, 0), Complex64::new(0.0, 0.0));
        assert_eq!(seg.masked.get(2, 2), Complex64::new(10.0, 0.0));
        assert_eq!(seg.survivors, vec![Survivor { row: 2, col: 2 }]);
        assert!(seg.is_survivor(2, 2));
        assert!(!seg.is_survivor(0, 0));
    }

    #[test]
    fn constant_image_keeps_every_coordinate() {
        let img = ImageF64::from_vec(4, 4, vec![9.0; 16]).unwrap();
        let spec = forward(&img).unwrap();
        let seg = segment(&spec, 0.4).unwrap();
        assert_eq!(seg.peak_magnitude, 0.0);
        assert_eq!(seg.threshold, 0.0);
        assert_eq!(seg.survivors.len(), 16);
        assert!(seg.is_flat());
        assert_eq!(seg.masked, spec);
    }

    #[test]
    fn rounding_noise_of_a_constant_image_is_flat() {
        for &(w, h) in &[(50, 50), (100, 100), (30, 18), (7, 5)] {
            let img = ImageF64::from_vec(w, h, vec![42.0; w * h]).unwrap();
            let seg = segment(&forward(&img).unwrap(), 0.4).unwrap();
            assert!(
                seg.is_flat(),
                "{w}x{h}: peak={} floor={}",
                seg.peak_magnitude,
                seg.noise_floor
            );
        }
    }

    #[test]
    fn weak_ripple_is_not_flat() {
        let img = ImageF64::from_fn(50, 50, |x, _| 42.0 + if x % 5 == 0 { 0.01 } else { 0.0 });
        let seg = segment(&forward(&img).unwrap(), 0.4).unwrap();
        assert!(!seg.is_flat(), "peak={} floor={}", seg.peak_magnitude, seg.noise_floor);
    }

    #[test]
    fn higher_fraction_never_adds_survivors() {
        let img = ImageF64::from_fn(16, 12, |x, y| ((x * 5 + y * 3) % 7) as f64 * 10.0);
        let spec = forward(&img).unwrap();
        let mut last = usize::MAX;
        for k in 0..=12 {
            let count = segment(&spec, k as f64 * 0.1).unwrap().survivors.len();
            assert!(count <= last, "fraction {} grew survivors", k as f64 * 0.1);
            last = count;
        }
    }

    #[test]
    fn fraction_above_one_keeps_only_strong_cells() {
        let spec = spectrum_from(4, 2, &[(0, 1, 5.0), (1, 3, 2.0)]);
        let seg = segment(&spec, 1.0).unwrap();
        assert_eq!(seg.survivors, vec![Survivor { row: 0, col: 1 }]);
        let seg = segment(&spec, 1.5).unwrap();
        assert!(seg.survivors.is_empty());
        assert_eq!(seg.masked.nonzero_count(), 0);
    }

    #[test]
    fn negative_fraction_is_rejected() {
        let spec = spectrum_from(2, 2, &[]);
        assert_eq!(
            segment(&spec, -0.1).unwrap_err(),
            ComputeError::InvalidFraction(-0.1)
        );
        assert!(matches!(
            segment(&spec, f64::NAN),
            Err(ComputeError::InvalidFraction(_))
        ));
    }
}
