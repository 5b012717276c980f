//! Owned single-channel f64 image in row-major layout (stride == width).
//!
//! This is the real-valued grid the remover consumes and produces. Values are
//! raw intensities (typically 0..=255), not normalized.
use crate::error::ComputeError;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF64 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f64 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f64>,
}

impl ImageF64 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Wrap an existing row-major buffer, checking that it matches `w × h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f64>) -> Result<Self, ComputeError> {
        check_packed_len(w, h, data.len())?;
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut img = Self::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.data[y * w + x] = f(x, y);
            }
        }
        img
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f64) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Returns `(min, max)` over all samples, or `None` for an empty image.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut it = self.data.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Fail unless `data` holds exactly `w × h` samples with `stride == w`.
    ///
    /// The fields are public, so every stage that walks the buffer calls this
    /// first instead of trusting the constructor.
    pub fn check_packed(&self) -> Result<(), ComputeError> {
        check_packed_len(self.w, self.h, self.data.len())?;
        if self.stride != self.w {
            return Err(ComputeError::Dimension {
                width: self.w,
                height: self.h,
                reason: "stride differs from width",
            });
        }
        Ok(())
    }
}

/// Shared by real images and spectra: `len` must equal `w × h`.
pub(crate) fn check_packed_len(w: usize, h: usize, len: usize) -> Result<(), ComputeError> {
    if w.checked_mul(h) != Some(len) {
        return Err(ComputeError::Dimension {
            width: w,
            height: h,
            reason: "buffer length does not match width * height",
        });
    }
    Ok(())
}

impl crate::image::traits::ImageView for ImageF64 {
    type Pixel = f64;

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
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f64] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f64]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl crate::image::traits::ImageViewMut for ImageF64 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f64] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_length_mismatch() {
        let err = ImageF64::from_vec(3, 2, vec![0.0; 5]).unwrap_err();
        assert!(matches!(err, ComputeError::Dimension { width: 3, height: 2, .. }));
    }

    #[test]
    fn short_or_strided_buffers_are_not_packed() {
        let mut img = ImageF64::new(4, 4);
        assert!(img.check_packed().is_ok());
        img.data.pop();
        assert!(matches!(
            img.check_packed(),
            Err(ComputeError::Dimension { width: 4, height: 4, .. })
        ));
        let strided = ImageF64 {
            w: 3,
            h: 2,
            stride: 4,
            data: vec![0.0; 8],
        };
        assert!(strided.check_packed().is_err());
    }

    #[test]
    fn from_fn_is_row_major() {
        let img = ImageF64::from_fn(3, 2, |x, y| (y * 10 + x) as f64);
        assert_eq!(img.data, vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(img.get(2, 1), 12.0);
        assert_eq!(img.min_max(), Some((0.0, 12.0)));
    }
}
