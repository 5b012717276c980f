//! Dominant grid directions from thresholded spectral peaks.
//!
//! Overview
//! - Only the upper half of the spectrum (`row < height / 2`) is used: the
//!   spectrum of a real image is Hermitian, so the lower half mirrors it.
//! - Columns past `width / 2` are negative frequencies and are shifted by
//!   `-width` before computing angle and radius around DC.
//! - Peaks within `min_peak_distance` of DC are dropped as low-frequency
//!   clutter.
//! - The remaining peaks are sorted by angle and split in two at the first
//!   point more than `cluster_gap_deg` away from the first one. Each cluster
//!   yields its mean angle and its smallest radius.
//!
//! The split is a fixed heuristic: two grid directions closer than the gap,
//! or broadly scattered spurious peaks, are not separated correctly.

pub mod cluster;
pub mod point;

pub use point::SpectralPoint;

use crate::error::ComputeError;
use crate::segment::Survivor;
use crate::types::GridLine;
use log::debug;
use serde::{Deserialize, Serialize};

/// Knobs of the peak geometry estimator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeakOptions {
    /// Peaks at or within this radius of DC are ignored.
    pub min_peak_distance: f64,
    /// Angular gap separating the two clusters (degrees).
    pub cluster_gap_deg: f64,
}

impl Default for PeakOptions {
    fn default() -> Self {
        Self {
            min_peak_distance: 15.0,
            cluster_gap_deg: 60.0,
        }
    }
}

/// Lines plus the bookkeeping needed for diagnostics.
#[derive(Clone, Debug)]
pub struct PeakEstimate {
    pub lines: [GridLine; 2],
    /// Upper-half survivors before the distance filter.
    pub candidates: usize,
    /// Points in cluster A and cluster B.
    pub cluster_sizes: [usize; 2],
}

/// Upper-half survivors mapped to the signed frequency plane and stripped of
/// near-DC clutter, sorted by angle ascending.
pub fn collect_points(
    survivors: &[Survivor],
    height: usize,
    width: usize,
    min_peak_distance: f64,
) -> (Vec<SpectralPoint>, usize) {
    let half = height / 2;
    let mut candidates = 0usize;
    let mut points: Vec<SpectralPoint> = survivors
        .iter()
        .filter(|s| s.row < half)
        .inspect(|_| candidates += 1)
        .map(|s| SpectralPoint::from_coords(s.row, s.col, width))
        .filter(|p| p.distance > min_peak_distance)
        .collect();
    points.sort_by(|a, b| a.angle_deg.total_cmp(&b.angle_deg));
    (points, candidates)
}

/// Estimate the two dominant grid directions from the survivors of a
/// `height × width` spectrum.
pub fn estimate_lines(
    survivors: &[Survivor],
    height: usize,
    width: usize,
    options: &PeakOptions,
) -> Result<PeakEstimate, ComputeError> {
    let (points, candidates) = collect_points(survivors, height, width, options.min_peak_distance);
    if points.len() < 2 {
        debug!(
            "estimate_lines: {} of {} candidates beyond radius {:.1}",
            points.len(),
            candidates,
            options.min_peak_distance
        );
        return Err(ComputeError::InsufficientPeaks {
            points: points.len(),
        });
    }

    let Some(split) = cluster::split_index(&points, options.cluster_gap_deg) else {
        debug!(
            "estimate_lines: all {} peaks within {:.1} deg of {:.2} deg",
            points.len(),
            options.cluster_gap_deg,
            points[0].angle_deg
        );
        return Err(ComputeError::InsufficientPeaks {
            points: points.len(),
        });
    };
    let (cluster_a, cluster_b) = points.split_at(split);
    let (Some(line_a), Some(line_b)) =
        (cluster::summarize(cluster_a), cluster::summarize(cluster_b))
    else {
        return Err(ComputeError::InsufficientPeaks {
            points: points.len(),
        });
    };

    debug!(
        "estimate_lines: candidates={} kept={} clusters=[{}, {}] angles=[{:.2}, {:.2}] dists=[{:.2}, {:.2}]",
        candidates,
        points.len(),
        cluster_a.len(),
        cluster_b.len(),
        line_a.angle_deg,
        line_b.angle_deg,
        line_a.distance,
        line_b.distance
    );

    Ok(PeakEstimate {
        lines: [line_a, line_b],
        candidates,
        cluster_sizes: [cluster_a.len(), cluster_b.len()],
    })
}
