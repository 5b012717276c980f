use crate::image::ImageF64;
use serde::{Deserialize, Serialize};

/// One dominant periodic direction of the grid.
///
/// `angle_deg` is the orientation of the spectral peaks (in `[0, 180)`) as
/// seen from the spectral origin; `distance` is the radius of the closest
/// peak, i.e. the fundamental frequency of the lines in that direction. For
/// an image of extent `n` along that direction, the line spacing in pixels is
/// roughly `n / distance`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLine {
    pub angle_deg: f64,
    pub distance: f64,
}

/// Output of a successful run.
#[derive(Clone, Debug)]
pub struct ComputeResult {
    /// Input image with every grid pixel set to zero. Same size as the input.
    pub result_image: ImageF64,
    /// Spatial reconstruction of the grid alone (real part of the inverse
    /// transform of the masked spectrum).
    pub grid_image: ImageF64,
    /// The two dominant directions, in cluster order.
    pub lines: [GridLine; 2],
    /// Magnitude threshold applied by the segmenter.
    pub threshold: f64,
    /// Number of spectral coordinates that met the threshold.
    pub survivor_count: usize,
    /// Number of pixels classified as grid and zeroed.
    pub flagged_pixels: usize,
}

/// Compact serializable summary of a [`ComputeResult`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReport {
    pub width: usize,
    pub height: usize,
    pub lines: [GridLine; 2],
    pub threshold: f64,
    pub survivor_count: usize,
    pub flagged_pixels: usize,
}

impl ComputeResult {
    pub fn report(&self) -> LineReport {
        LineReport {
            width: self.result_image.w,
            height: self.result_image.h,
            lines: self.lines,
            threshold: self.threshold,
            survivor_count: self.survivor_count,
            flagged_pixels: self.flagged_pixels,
        }
    }
}
