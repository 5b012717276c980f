//! Two-way split of angle-sorted peaks.
use super::SpectralPoint;
use crate::types::GridLine;

/// Index of the first point whose angle differs from the first point's by
/// more than `gap_deg`, or `None` when every point stays within the gap.
///
/// `points` must be sorted by angle ascending.
pub fn split_index(points: &[SpectralPoint], gap_deg: f64) -> Option<usize> {
    let first = points.first()?.angle_deg;
    points
        .iter()
        .position(|p| (p.angle_deg - first).abs() > gap_deg)
}

/// Mean angle and minimum distance of a non-empty cluster.
///
/// The closest peak is the fundamental; harmonics lie further out.
pub fn summarize(cluster: &[SpectralPoint]) -> Option<GridLine> {
    if cluster.is_empty() {
        return None;
    }
    let angle_sum: f64 = cluster.iter().map(|p| p.angle_deg).sum();
    let distance = cluster
        .iter()
        .map(|p| p.distance)
        .fold(f64::INFINITY, f64::min);
    Some(GridLine {
        angle_deg: angle_sum / cluster.len() as f64,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn pt(angle_deg: f64, distance: f64) -> SpectralPoint {
        SpectralPoint {
            row: 0,
            col: 0,
            offset: Vector2::zeros(),
            angle_deg,
            distance,
        }
    }

    #[test]
    fn split_cuts_at_first_large_gap() {
        let pts = [pt(1.0, 20.0), pt(3.0, 18.0), pt(61.5, 30.0), pt(92.0, 16.0)];
        assert_eq!(split_index(&pts, 60.0), Some(2));
        assert_eq!(split_index(&pts, 90.0), Some(3));
        assert_eq!(split_index(&pts, 91.0), None);
        assert_eq!(split_index(&[], 60.0), None);
    }

    #[test]
    fn gap_is_measured_from_the_first_point() {
        // consecutive steps of 40° never exceed the gap pairwise, but the
        // third point is 80° away from the first
        let pts = [pt(0.0, 20.0), pt(40.0, 20.0), pt(80.0, 20.0)];
        assert_eq!(split_index(&pts, 60.0), Some(2));
    }

    #[test]
    fn summary_uses_mean_angle_and_min_distance() {
        let line = summarize(&[pt(88.0, 32.0), pt(90.0, 16.0), pt(92.0, 48.0)]).unwrap();
        assert!((line.angle_deg - 90.0).abs() < 1e-12);
        assert_eq!(line.distance, 16.0);
        assert!(summarize(&[]).is_none());
    }
}
