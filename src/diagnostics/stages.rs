use crate::types::GridLine;
use serde::Serialize;

/// Forward or inverse transform pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformStage {
    pub elapsed_ms: f64,
    /// Magnitude of the DC coefficient (same convention as thresholding).
    pub dc_magnitude: f64,
}

/// Spectral thresholding.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStage {
    pub elapsed_ms: f64,
    pub fraction: f64,
    pub peak_magnitude: f64,
    pub threshold: f64,
    pub survivors: usize,
    pub total_coefficients: usize,
}

/// Angle clustering of the surviving peaks.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakStage {
    pub elapsed_ms: f64,
    pub min_peak_distance: f64,
    pub cluster_gap_deg: f64,
    /// Upper-half survivors considered before the radius filter.
    pub candidates: usize,
    pub cluster_sizes: [usize; 2],
    pub lines: [GridLine; 2],
    /// Undirected angle between the two reported directions.
    pub separation_deg: f64,
}

/// Inverse transform and spatial masking.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconstructStage {
    pub elapsed_ms: f64,
    pub brightness_threshold: f64,
    pub flagged_pixels: usize,
    pub grid_min: f64,
    pub grid_max: f64,
}
