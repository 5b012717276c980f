//! Remover pipeline orchestrating the spectral stages.
//!
//! Stages
//! - Forward: unnormalized 2D DFT of the input image.
//! - Segment: keep coefficients at or above `fraction` of the non-DC peak.
//! - Peaks: cluster upper-half survivors by angle into two grid lines.
//! - Reconstruct: inverse DFT of the kept coefficients, then zero every
//!   input pixel where the reconstruction is brighter than the cut.
//!
//! Typical usage:
//! ```no_run
//! use grid_remover::{GridRemover, RemoverParams};
//! use grid_remover::image::ImageF64;
//!
//! # fn example(image: ImageF64) {
//! let remover = GridRemover::new(RemoverParams::default());
//! match remover.process(&image) {
//!     Ok(res) => println!("lines: {:?}", res.lines),
//!     Err(e) if e.is_no_grid() => println!("no grid found"),
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! # }
//! ```

use super::params::RemoverParams;
use super::state::PipelineState;
use crate::angle::angular_difference_deg;
use crate::diagnostics::{
    DetailedResult, InputDescriptor, PeakStage, PipelineTrace, ReconstructStage, SegmentStage,
    TimingBreakdown, TransformStage,
};
use crate::error::ComputeError;
use crate::image::ImageF64;
use crate::peaks::estimate_lines;
use crate::reconstruct::reconstruct;
use crate::segment::{segment, SegmentedSpectrum};
use crate::spectrum::{forward, magnitude, Spectrum};
use crate::types::ComputeResult;
use log::{debug, warn};
use std::time::Instant;

/// Frequency-domain grid remover. Holds only its parameters; every call
/// allocates fresh intermediate grids.
#[derive(Clone, Debug, Default)]
pub struct GridRemover {
    params: RemoverParams,
}

/// Intermediate grids a caller may want to keep for display.
#[derive(Default)]
struct Artifacts {
    spectrum: Option<Spectrum>,
    segmented: Option<SegmentedSpectrum>,
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

impl GridRemover {
    /// Create a remover with the supplied parameters.
    pub fn new(params: RemoverParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RemoverParams {
        &self.params
    }

    /// Remove the grid from `image` and report its two directions.
    pub fn process(&self, image: &ImageF64) -> Result<ComputeResult, ComputeError> {
        let mut artifacts = Artifacts::default();
        self.run(image, &mut artifacts).map(|(result, _)| result)
    }

    /// Same as [`process`](Self::process) with a per-stage trace.
    pub fn process_with_diagnostics(
        &self,
        image: &ImageF64,
    ) -> Result<DetailedResult, ComputeError> {
        let mut artifacts = Artifacts::default();
        let (result, trace) = self.run(image, &mut artifacts)?;
        Ok(DetailedResult { result, trace })
    }

    /// Run on the image held by `state` and store every intermediate grid,
    /// the result and the trace back into it.
    ///
    /// The spectrum and the masked spectrum are stored even when the run
    /// fails at peak estimation, so they can still be inspected.
    pub fn process_into<'s>(
        &self,
        state: &'s mut PipelineState,
    ) -> Result<&'s ComputeResult, ComputeError> {
        let image = state.image.as_ref().ok_or(ComputeError::Dimension {
            width: 0,
            height: 0,
            reason: "no image loaded",
        })?;
        let mut artifacts = Artifacts::default();
        let outcome = self.run(image, &mut artifacts);
        state.clear_outputs();
        state.spectrum = artifacts.spectrum;
        state.masked_spectrum = artifacts.segmented.map(|s| s.masked);
        let (result, trace) = outcome?;
        state.trace = Some(trace);
        Ok(state.result.insert(result))
    }

    fn run(
        &self,
        image: &ImageF64,
        artifacts: &mut Artifacts,
    ) -> Result<(ComputeResult, PipelineTrace), ComputeError> {
        let total_start = Instant::now();
        self.params.validate()?;
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let spectrum = forward(image)?;
        let forward_stage = TransformStage {
            elapsed_ms: elapsed_ms(start),
            dc_magnitude: magnitude(spectrum.get(0, 0)),
        };
        timings.push("forward", forward_stage.elapsed_ms);

        let start = Instant::now();
        let spectrum = artifacts.spectrum.insert(spectrum);
        let segmented = segment(spectrum, self.params.fraction)?;
        let segment_stage = SegmentStage {
            elapsed_ms: elapsed_ms(start),
            fraction: self.params.fraction,
            peak_magnitude: segmented.peak_magnitude,
            threshold: segmented.threshold,
            survivors: segmented.survivors.len(),
            total_coefficients: spectrum.data.len(),
        };
        timings.push("segment", segment_stage.elapsed_ms);
        let segmented = artifacts.segmented.insert(segmented);

        if segmented.is_flat() {
            warn!(
                "GridRemover::run no off-DC spectral energy in {}x{} image",
                image.w, image.h
            );
            return Err(ComputeError::InsufficientPeaks { points: 0 });
        }

        let start = Instant::now();
        let peak_options = self.params.peak_options();
        let estimate = estimate_lines(&segmented.survivors, image.h, image.w, &peak_options)?;
        let peak_stage = PeakStage {
            elapsed_ms: elapsed_ms(start),
            min_peak_distance: peak_options.min_peak_distance,
            cluster_gap_deg: peak_options.cluster_gap_deg,
            candidates: estimate.candidates,
            cluster_sizes: estimate.cluster_sizes,
            lines: estimate.lines,
            separation_deg: angular_difference_deg(
                estimate.lines[0].angle_deg,
                estimate.lines[1].angle_deg,
            ),
        };
        timings.push("peaks", peak_stage.elapsed_ms);

        let start = Instant::now();
        let rec = reconstruct(image, &segmented.masked, self.params.grid_brightness_threshold)?;
        let (grid_min, grid_max) = rec.grid_image.min_max().unwrap_or((0.0, 0.0));
        let reconstruct_stage = ReconstructStage {
            elapsed_ms: elapsed_ms(start),
            brightness_threshold: self.params.grid_brightness_threshold,
            flagged_pixels: rec.flagged_pixels,
            grid_min,
            grid_max,
        };
        timings.push("reconstruct", reconstruct_stage.elapsed_ms);
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "GridRemover::run {}x{} lines=[({:.2}, {:.2}), ({:.2}, {:.2})] flagged={} total_ms={:.3}",
            image.w,
            image.h,
            estimate.lines[0].angle_deg,
            estimate.lines[0].distance,
            estimate.lines[1].angle_deg,
            estimate.lines[1].distance,
            rec.flagged_pixels,
            timings.total_ms
        );

        let result = ComputeResult {
            result_image: rec.result_image,
            grid_image: rec.grid_image,
            lines: estimate.lines,
            threshold: segmented.threshold,
            survivor_count: segmented.survivors.len(),
            flagged_pixels: rec.flagged_pixels,
        };
        let trace = PipelineTrace {
            input: InputDescriptor::describe(image),
            timings,
            forward: forward_stage,
            segment: segment_stage,
            peaks: peak_stage,
            reconstruct: reconstruct_stage,
        };
        Ok((result, trace))
    }
}

/// Remove the periodic grid from `image` using `params`.
///
/// This is the single entry point for callers that do not need diagnostics or
/// intermediate grids.
pub fn compute(image: &ImageF64, params: &RemoverParams) -> Result<ComputeResult, ComputeError> {
    GridRemover::new(params.clone()).process(image)
}
