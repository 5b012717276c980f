//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an `ImageF64` of raw
//!   8-bit intensities, optionally inverted.
//! - `save_grayscale_f64`: write an `ImageF64` to an 8-bit PNG, stretching the
//!   value range to `[0, 255]`.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! These helpers only serve the demo binary and tests; the remover itself
//! never touches the filesystem.
use super::{ImageF64, ImageView};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as 8-bit luma converted to `f64` samples.
///
/// With `invert`, each sample becomes `255 - v` so dark chart lines on a
/// light background turn into bright lines on a dark background.
pub fn load_grayscale_image(path: &Path, invert: bool) -> Result<ImageF64, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .into_raw()
        .into_iter()
        .map(|v| if invert { f64::from(255 - v) } else { f64::from(v) })
        .collect();
    ImageF64::from_vec(width, height, data).map_err(|e| format!("{}: {e}", path.display()))
}

/// Map a float image onto 8-bit gray by min-max stretching.
///
/// A constant image maps to all zeros. With `invert`, the stretched value `v`
/// becomes `255 - v`.
pub fn to_gray_u8(image: &ImageF64, invert: bool) -> GrayImage {
    let (lo, hi) = image.min_max().unwrap_or((0.0, 0.0));
    let span = hi - lo;
    let scale = if span > 0.0 && span.is_finite() {
        255.0 / span
    } else {
        0.0
    };
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let mut v = ((px - lo) * scale).clamp(0.0, 255.0) as u8;
            if invert {
                v = 255 - v;
            }
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out
}

/// Save a float image to a grayscale PNG after min-max stretching.
pub fn save_grayscale_f64(image: &ImageF64, path: &Path, invert: bool) -> Result<(), String> {
    ensure_parent_dir(path)?;
    to_gray_u8(image, invert)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
