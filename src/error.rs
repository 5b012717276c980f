//! Error type returned by the remover pipeline.

/// Failures surfaced by [`compute`](crate::compute) and its stages.
///
/// `InsufficientPeaks` is an expected outcome on images without a periodic
/// grid; callers typically report "no grid found" and may retry with a lower
/// `fraction` or a different `min_peak_distance`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputeError {
    #[error("invalid grid dimensions {width}x{height}: {reason}")]
    Dimension {
        width: usize,
        height: usize,
        reason: &'static str,
    },
    #[error("threshold fraction must be non-negative, got {0}")]
    InvalidFraction(f64),
    #[error("no periodic grid detected ({points} spectral peaks usable)")]
    InsufficientPeaks { points: usize },
}

impl ComputeError {
    /// True for the recoverable "no grid in this image" outcome.
    pub fn is_no_grid(&self) -> bool {
        matches!(self, Self::InsufficientPeaks { .. })
    }

    pub(crate) fn empty(width: usize, height: usize) -> Self {
        Self::Dimension {
            width,
            height,
            reason: "grid has zero rows or columns",
        }
    }
}
