use grid_remover::image::ImageF64;

/// Square image with bright (255) lines every `period` rows and columns over
/// a constant `background`.
pub fn grid_f64(size: usize, period: usize, background: f64) -> ImageF64 {
    assert!(size > 0, "image dimensions must be positive");
    assert!(period > 0, "line period must be positive");
    ImageF64::from_fn(size, size, |x, y| {
        if x % period == 0 || y % period == 0 {
            255.0
        } else {
            background
        }
    })
}

/// Bright horizontal lines every `period` rows, nothing else.
pub fn horizontal_lines_f64(width: usize, height: usize, period: usize) -> ImageF64 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    ImageF64::from_fn(width, height, |_, y| if y % period == 0 { 255.0 } else { 0.0 })
}

/// Deterministic pseudo-random texture in `[0, amplitude)`.
pub fn texture_f64(width: usize, height: usize, amplitude: f64) -> ImageF64 {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    ImageF64::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64 * amplitude
    })
}
