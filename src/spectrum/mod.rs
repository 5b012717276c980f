//! Complex spectra and the operations defined on them.
//!
//! A [`Spectrum`] is the unshifted 2D DFT of an [`ImageF64`]: index `(0, 0)`
//! holds the DC term, rows and columns past the half-way point hold negative
//! frequencies.
//!
//! Modules
//! - [`transform`] – forward / inverse 2D DFT built on `rustfft`.
//! - [`coeff`] – magnitude and phase of a single coefficient.
//! - [`display`] – quadrant shift and log-magnitude / phase renderings.

pub mod coeff;
pub mod display;
pub mod transform;

use crate::error::ComputeError;
use crate::image::f64::check_packed_len;
use crate::image::{ImageF64, ImageView};
use rustfft::num_complex::Complex64;

pub use coeff::{magnitude, phase, phase_deg};
pub use transform::{forward, inverse};

/// Owned complex grid in row-major layout, same shape as its source image.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    pub w: usize,
    pub h: usize,
    pub data: Vec<Complex64>,
}

impl Spectrum {
    /// Zero-filled spectrum of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![Complex64::new(0.0, 0.0); w * h],
        }
    }

    /// Lift a real image into the complex plane (imaginary parts zero).
    pub fn from_real(image: &ImageF64) -> Result<Self, ComputeError> {
        image.check_packed()?;
        let mut data = Vec::with_capacity(image.w * image.h);
        for row in image.rows() {
            data.extend(row.iter().map(|&v| Complex64::new(v, 0.0)));
        }
        Ok(Self {
            w: image.w,
            h: image.h,
            data,
        })
    }

    /// Fail unless `data` holds exactly `w × h` coefficients.
    pub fn check_packed(&self) -> Result<(), ComputeError> {
        check_packed_len(self.w, self.h, self.data.len())
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.w + col
    }

    /// Coefficient at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, c: Complex64) {
        let i = self.idx(row, col);
        self.data[i] = c;
    }

    /// Real part of every coefficient as an image.
    pub fn real_part(&self) -> ImageF64 {
        ImageF64 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.data.iter().map(|c| c.re).collect(),
        }
    }

    /// Number of non-zero coefficients.
    pub fn nonzero_count(&self) -> usize {
        self.data
            .iter()
            .filter(|c| c.re != 0.0 || c.im != 0.0)
            .count()
    }
}

impl ImageView for Spectrum {
    type Pixel = Complex64;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[Complex64] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Complex64]> {
        Some(&self.data)
    }
}
