use crate::angle::direction_deg;
use nalgebra::Vector2;
use serde::Serialize;

/// Surviving spectral coordinate expressed in the signed frequency plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectralPoint {
    pub row: usize,
    pub col: usize,
    /// Signed frequency offset `(col', row)` where `col' = col - width` for
    /// columns past the half-way point.
    pub offset: Vector2<f64>,
    pub angle_deg: f64,
    pub distance: f64,
}

impl SpectralPoint {
    /// Map `(row, col)` of a `width`-column spectrum to angle and radius
    /// around the spectral origin.
    pub fn from_coords(row: usize, col: usize, width: usize) -> Self {
        let col_offset = if col > width / 2 {
            col as f64 - width as f64
        } else {
            col as f64
        };
        let offset = Vector2::new(col_offset, row as f64);
        Self {
            row,
            col,
            offset,
            angle_deg: direction_deg(offset.y, offset.x),
            distance: offset.norm(),
        }
    }
}
