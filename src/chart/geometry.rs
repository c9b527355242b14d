//! Slice arc geometry
//!
//! Converts the fixed ordered slice angles into arc segments around a center
//! point. Angles are in degrees; 0° points along +x and angles grow
//! clockwise in screen coordinates (y down), matching the SVG arc sweep
//! direction used by the renderer.
//!
//! The input angles are trusted constant data from the rubric catalog; this
//! module does not validate that they sum to 360 or that the radius is
//! positive.

use super::Point2D;

/// One chart sector's arc, recomputed per render
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceArc {
    /// Angle where the slice begins, degrees
    pub start_angle: f64,
    /// Angular extent of the slice, degrees
    pub sweep_angle: f64,
    /// Point on the circle at `start_angle`
    pub start_point: Point2D,
    /// Point on the circle at `start_angle + sweep_angle`
    pub end_point: Point2D,
}

impl SliceArc {
    /// Whether an SVG/geometry API must use the large-arc form
    pub fn is_large_arc(&self) -> bool {
        self.sweep_angle > 180.0
    }

    /// Angular midpoint of the slice, degrees
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle / 2.0
    }
}

/// Point on a circle at `angle` degrees
pub(crate) fn point_at(center: Point2D, radius: f64, angle: f64) -> Point2D {
    let rad = angle.to_radians();
    Point2D::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Partition a circle into arcs, one per input angle, in input order
///
/// Maintains a running start angle beginning at `rotation_offset` and
/// advances it by each sweep in turn.
pub fn compute_arcs(
    center: Point2D,
    radius: f64,
    angles: &[f64],
    rotation_offset: f64,
) -> Vec<SliceArc> {
    let mut arcs = Vec::with_capacity(angles.len());
    let mut running = rotation_offset;

    for &sweep in angles {
        arcs.push(SliceArc {
            start_angle: running,
            sweep_angle: sweep,
            start_point: point_at(center, radius, running),
            end_point: point_at(center, radius, running + sweep),
        });
        running += sweep;
    }

    arcs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::slice_angles;

    const CENTER: Point2D = Point2D { x: 300.0, y: 250.0 };

    #[test]
    fn one_arc_per_angle() {
        let arcs = compute_arcs(CENTER, 180.0, &slice_angles(), 0.0);
        assert_eq!(arcs.len(), slice_angles().len());
    }

    #[test]
    fn start_angles_are_partial_sums() {
        let angles = slice_angles();
        let arcs = compute_arcs(CENTER, 180.0, &angles, 0.0);

        let mut expected = 0.0;
        for (arc, angle) in arcs.iter().zip(angles) {
            assert!((arc.start_angle - expected).abs() < 1e-9);
            assert!((arc.sweep_angle - angle).abs() < 1e-9);
            expected += angle;
        }

        let last = arcs.last().unwrap();
        assert!((last.start_angle + last.sweep_angle - 360.0).abs() < 1e-9);
    }

    #[test]
    fn rotation_offset_shifts_every_arc() {
        let angles = slice_angles();
        let arcs = compute_arcs(CENTER, 180.0, &angles, -90.0);
        assert!((arcs[0].start_angle - (-90.0)).abs() < 1e-9);

        let last = arcs.last().unwrap();
        assert!((last.start_angle + last.sweep_angle - 270.0).abs() < 1e-9);
    }

    #[test]
    fn endpoints_lie_on_the_circle() {
        let radius = 180.0;
        for arc in compute_arcs(CENTER, radius, &slice_angles(), -90.0) {
            for p in [arc.start_point, arc.end_point] {
                let d = ((p.x - CENTER.x).powi(2) + (p.y - CENTER.y).powi(2)).sqrt();
                assert!((d - radius).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn large_arc_flag_tracks_sweep() {
        let arcs = compute_arcs(CENTER, 100.0, &[90.0, 200.0, 70.0], 0.0);
        assert!(!arcs[0].is_large_arc());
        assert!(arcs[1].is_large_arc());
        assert!(!arcs[2].is_large_arc());
    }

    #[test]
    fn mid_angle_bisects_the_sweep() {
        let arcs = compute_arcs(CENTER, 100.0, &[40.0, 40.0], 10.0);
        assert!((arcs[0].mid_angle() - 30.0).abs() < 1e-9);
        assert!((arcs[1].mid_angle() - 70.0).abs() < 1e-9);
    }
}
