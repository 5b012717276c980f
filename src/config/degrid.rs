use crate::RemoverParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration of the `degrid_demo` tool.
#[derive(Debug, Deserialize)]
pub struct DegridToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Invert intensities on load (dark lines on light paper become bright)
    /// and again when saving the result image.
    #[serde(default = "default_invert")]
    pub invert: bool,
    #[serde(default)]
    pub params: RemoverParams,
    pub output: DegridOutputConfig,
}

fn default_invert() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct DegridOutputConfig {
    #[serde(rename = "dir")]
    pub dir: PathBuf,
    #[serde(default = "default_result_image")]
    pub result_image: PathBuf,
    #[serde(default)]
    pub grid_image: Option<PathBuf>,
    /// Centred log-magnitude rendering of the input spectrum.
    #[serde(default)]
    pub spectrum_image: Option<PathBuf>,
    /// Same rendering for the thresholded spectrum.
    #[serde(default)]
    pub masked_spectrum_image: Option<PathBuf>,
    /// Render phases instead of magnitudes for the spectrum images.
    #[serde(default)]
    pub phase: bool,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

fn default_result_image() -> PathBuf {
    PathBuf::from("result.png")
}

impl DegridOutputConfig {
    pub fn resolve(&self, path: &Path) -> PathBuf {
        resolve_path(&self.dir, path)
    }
}

pub fn load_config(path: &Path) -> Result<DegridToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
