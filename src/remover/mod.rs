//! Grid remover: spectral thresholding, peak geometry and spatial masking.
//!
//! Overview
//! - Transforms the image into an unshifted spectrum (DC at `(0, 0)`).
//! - Keeps the coefficients whose magnitude reaches a fraction of the
//!   strongest non-DC coefficient; periodic line patterns concentrate their
//!   energy in a few such peaks.
//! - Derives the two grid directions from the angles of the kept peaks and
//!   the spacing from the peak closest to DC in each direction.
//! - Inverse-transforms the kept coefficients into an image of the grid and
//!   zeroes the input wherever that image is bright.
//!
//! Modules
//! - [`params`] – configuration of the remover.
//! - `pipeline` – the [`GridRemover`] implementation and [`compute`].
//! - [`state`] – caller-owned [`PipelineState`] holding intermediate grids.

pub mod params;
mod pipeline;
pub mod state;

pub use params::RemoverParams;
pub use pipeline::{compute, GridRemover};
pub use state::PipelineState;
