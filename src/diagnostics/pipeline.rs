use crate::diagnostics::{
    PeakStage, ReconstructStage, SegmentStage, TimingBreakdown, TransformStage,
};
use crate::types::ComputeResult;
use serde::Serialize;

/// Result produced by [`GridRemover::process_with_diagnostics`](crate::GridRemover).
#[derive(Clone, Debug)]
pub struct DetailedResult {
    pub result: ComputeResult,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing the internal execution of the remover.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub forward: TransformStage,
    pub segment: SegmentStage,
    pub peaks: PeakStage,
    pub reconstruct: ReconstructStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub mean_intensity: f64,
}

impl InputDescriptor {
    pub fn describe(image: &crate::image::ImageF64) -> Self {
        let n = image.data.len().max(1) as f64;
        Self {
            width: image.w,
            height: image.h,
            mean_intensity: image.data.iter().sum::<f64>() / n,
        }
    }
}
