//! Spatial grid reconstruction and removal.
use crate::error::ComputeError;
use crate::image::{ImageF64, ImageView, ImageViewMut};
use crate::spectrum::{inverse, Spectrum};
use log::debug;

/// Grid image, filtered image and the number of pixels classified as grid.
#[derive(Clone, Debug)]
pub struct Reconstruction {
    pub grid_image: ImageF64,
    pub result_image: ImageF64,
    pub flagged_pixels: usize,
}

/// Zero every pixel of `image` where `grid_image` exceeds `brightness`.
///
/// Other pixels are copied unchanged. Returns the filtered image and the
/// number of zeroed pixels.
pub fn remove_grid(
    image: &ImageF64,
    grid_image: &ImageF64,
    brightness: f64,
) -> Result<(ImageF64, usize), ComputeError> {
    image.check_packed()?;
    grid_image.check_packed()?;
    if image.dims() != grid_image.dims() {
        return Err(ComputeError::Dimension {
            width: grid_image.w,
            height: grid_image.h,
            reason: "grid image dimensions differ from the image",
        });
    }
    let mut out = ImageF64::new(image.w, image.h);
    let mut flagged = 0usize;
    for y in 0..image.h {
        let src = image.row(y);
        let grid = grid_image.row(y);
        let dst = out.row_mut(y);
        for x in 0..image.w {
            if grid[x] > brightness {
                flagged += 1;
            } else {
                dst[x] = src[x];
            }
        }
    }
    Ok((out, flagged))
}

/// Inverse-transform `masked` into a grid image and remove it from `image`.
pub fn reconstruct(
    image: &ImageF64,
    masked: &Spectrum,
    brightness: f64,
) -> Result<Reconstruction, ComputeError> {
    image.check_packed()?;
    if image.dims() != masked.dims() {
        return Err(ComputeError::Dimension {
            width: masked.w,
            height: masked.h,
            reason: "spectrum dimensions differ from the image",
        });
    }
    let grid_image = inverse(masked)?.real_part();
    let (result_image, flagged_pixels) = remove_grid(image, &grid_image, brightness)?;
    debug!(
        "reconstruct: flagged {}/{} pixels above {:.1}",
        flagged_pixels,
        image.w * image.h,
        brightness
    );
    Ok(Reconstruction {
        grid_image,
        result_image,
        flagged_pixels,
    })
}
