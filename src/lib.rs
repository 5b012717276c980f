#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod remover;
pub mod types;

// Building blocks – public for tools and experiments.
pub mod angle;
pub mod config;
pub mod peaks;
pub mod reconstruct;
pub mod segment;
pub mod spectrum;

// --- High-level re-exports -------------------------------------------------

// Main entry points: remover + results.
pub use crate::error::ComputeError;
pub use crate::remover::{compute, GridRemover, PipelineState, RemoverParams};
pub use crate::types::{ComputeResult, GridLine, LineReport};

// Diagnostics returned by `GridRemover::process_with_diagnostics`.
pub use crate::diagnostics::{DetailedResult, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use grid_remover::prelude::*;
///
/// # fn main() {
/// let (w, h) = (64usize, 64usize);
/// let image = ImageF64::from_fn(w, h, |x, y| if x % 8 == 0 || y % 8 == 0 { 255.0 } else { 0.0 });
///
/// let remover = GridRemover::new(RemoverParams::default());
/// match remover.process(&image) {
///     Ok(res) => println!("lines={:?} flagged={}", res.lines, res.flagged_pixels),
///     Err(err) => println!("{err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageF64;
    pub use crate::{compute, ComputeError, ComputeResult, GridLine, GridRemover, RemoverParams};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::peaks::{estimate_lines, PeakEstimate, PeakOptions, SpectralPoint};
    pub use crate::reconstruct::{reconstruct, remove_grid, Reconstruction};
    pub use crate::segment::{segment, SegmentedSpectrum, Survivor};
    pub use crate::spectrum::{forward, inverse, magnitude, phase, Spectrum};

    pub use crate::diagnostics::{
        InputDescriptor, PeakStage, ReconstructStage, SegmentStage, StageTiming,
        TimingBreakdown, TransformStage,
    };
}
