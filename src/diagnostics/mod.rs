//! Diagnostics data model returned by the remover and the demo binary.
//!
//! `DetailedResult` bundles the regular [`ComputeResult`](crate::ComputeResult)
//! with a serializable `PipelineTrace` describing each stage that ran.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{DetailedResult, InputDescriptor, PipelineTrace};
pub use stages::{PeakStage, ReconstructStage, SegmentStage, TransformStage};
pub use timing::{StageTiming, TimingBreakdown};
