//! Caller-owned pipeline state.
//!
//! An interactive viewer typically keeps the loaded image, its spectrum, the
//! masked spectrum and the outputs of the last run around for display. This
//! value holds all of them; the remover itself stays stateless and only
//! writes here through [`GridRemover::process_into`](super::GridRemover::process_into).

use crate::diagnostics::PipelineTrace;
use crate::error::ComputeError;
use crate::image::ImageF64;
use crate::spectrum::{forward, inverse, Spectrum};
use crate::types::{ComputeResult, GridLine};

#[derive(Clone, Debug, Default)]
pub struct PipelineState {
    pub image: Option<ImageF64>,
    pub spectrum: Option<Spectrum>,
    pub masked_spectrum: Option<Spectrum>,
    pub result: Option<ComputeResult>,
    pub trace: Option<PipelineTrace>,
}

impl PipelineState {
    pub fn new(image: ImageF64) -> Self {
        Self {
            image: Some(image),
            ..Default::default()
        }
    }

    /// Replace the working image and drop everything derived from the old one.
    pub fn load_image(&mut self, image: ImageF64) {
        self.image = Some(image);
        self.clear_outputs();
    }

    /// Drop spectra and results, keeping the image.
    pub fn clear_outputs(&mut self) {
        self.spectrum = None;
        self.masked_spectrum = None;
        self.result = None;
        self.trace = None;
    }

    /// Recompute the spectrum from the current image.
    ///
    /// Returns `Ok(false)` when no image is loaded.
    pub fn forward_all(&mut self) -> Result<bool, ComputeError> {
        let Some(image) = &self.image else {
            return Ok(false);
        };
        self.spectrum = Some(forward(image)?);
        Ok(true)
    }

    /// Replace the image with the real part of the inverse of the current
    /// spectrum.
    ///
    /// Returns `Ok(false)` when no spectrum is available.
    pub fn inverse_all(&mut self) -> Result<bool, ComputeError> {
        let Some(spectrum) = &self.spectrum else {
            return Ok(false);
        };
        self.image = Some(inverse(spectrum)?.real_part());
        Ok(true)
    }

    pub fn grid_image(&self) -> Option<&ImageF64> {
        self.result.as_ref().map(|r| &r.grid_image)
    }

    pub fn result_image(&self) -> Option<&ImageF64> {
        self.result.as_ref().map(|r| &r.result_image)
    }

    pub fn lines(&self) -> Option<[GridLine; 2]> {
        self.result.as_ref().map(|r| r.lines)
    }
}
