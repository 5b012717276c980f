//! Parameters of the grid remover.
//!
//! Defaults reproduce the classic settings: 40% of the non-DC peak magnitude,
//! a 15-unit exclusion radius around DC, a 60° cluster gap and a grid
//! brightness cut of 16 intensity levels.

use crate::error::ComputeError;
use crate::peaks::PeakOptions;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoverParams {
    /// Fraction of the largest non-DC magnitude a coefficient must reach to
    /// be treated as grid. Lower keeps more spectral content as "grid".
    pub fraction: f64,
    /// Spectral peaks at or within this radius of DC are ignored when
    /// estimating line geometry.
    pub min_peak_distance: f64,
    /// Pixels whose reconstructed grid intensity exceeds this value are
    /// zeroed in the result.
    pub grid_brightness_threshold: f64,
    /// Angular gap (degrees) separating the two peak clusters.
    pub cluster_gap_deg: f64,
}

impl Default for RemoverParams {
    fn default() -> Self {
        Self {
            fraction: 0.40,
            min_peak_distance: 15.0,
            grid_brightness_threshold: 16.0,
            cluster_gap_deg: 60.0,
        }
    }
}

impl RemoverParams {
    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    pub fn with_min_peak_distance(mut self, distance: f64) -> Self {
        self.min_peak_distance = distance;
        self
    }

    pub fn with_grid_brightness_threshold(mut self, threshold: f64) -> Self {
        self.grid_brightness_threshold = threshold;
        self
    }

    pub fn peak_options(&self) -> PeakOptions {
        PeakOptions {
            min_peak_distance: self.min_peak_distance,
            cluster_gap_deg: self.cluster_gap_deg,
        }
    }

    /// Reject configurations that can never produce a result.
    pub fn validate(&self) -> Result<(), ComputeError> {
        if !(self.fraction >= 0.0) {
            return Err(ComputeError::InvalidFraction(self.fraction));
        }
        Ok(())
    }
}
