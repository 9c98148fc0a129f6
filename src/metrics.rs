//! Derived metric records, one struct per output family.

use kurbo::Point;

use crate::geom::{angle_at, area, distance, midline_rotation};

/// Per-parcel summary: nearest-neighbor distances and significant-point
/// count.
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelSummary {
    pub id: String,
    /// First and second nearest centroid distances.
    pub nearest: [f64; 2],
    /// Distinct points surviving reduction.
    pub significant_count: usize,
}

/// Metrics for a ring classified as a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleMetrics {
    pub id: String,
    /// Side lengths in ring order.
    pub sides: [f64; 4],
    /// Corner angles in radians; `angles[i]` sits between `sides[i]` and
    /// the next side.
    pub angles: [f64; 4],
    /// Shortest over longest side.
    pub min_ratio: f64,
    /// Longest over shortest side.
    pub max_ratio: f64,
    pub area: f64,
}

/// Metrics for a boxlike feature found on a ring.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxMetrics {
    pub id: String,
    /// Rotation of the mid segment relative to horizontal, mod pi/2.
    pub rotation: f64,
    pub left: f64,
    pub left_angle: f64,
    pub mid: f64,
    pub right_angle: f64,
    pub right: f64,
}

/// Build rectangle metrics from the five-point loop returned by the
/// classifier (four corners plus closure).
pub fn rectangle_metrics(id: &str, loop_points: &[Point]) -> RectangleMetrics {
    let q = &loop_points[..4];
    let mut sides = [0.0; 4];
    let mut angles = [0.0; 4];
    for i in 0..4 {
        sides[i] = distance(q[i], q[(i + 1) % 4]);
        angles[i] = angle_at(q[i], q[(i + 1) % 4], q[(i + 2) % 4]);
    }
    let shortest = sides.iter().cloned().fold(f64::INFINITY, f64::min);
    let longest = sides.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    RectangleMetrics {
        id: id.to_string(),
        sides,
        angles,
        min_ratio: shortest / longest,
        max_ratio: longest / shortest,
        area: area(loop_points),
    }
}

/// Build boxlike metrics from the four corner points of a detected box.
pub fn box_metrics(id: &str, corners: &[Point; 4]) -> BoxMetrics {
    let [p1, p2, p3, p4] = *corners;
    BoxMetrics {
        id: id.to_string(),
        rotation: midline_rotation(p2, p3),
        left: distance(p1, p2),
        left_angle: angle_at(p1, p2, p3),
        mid: distance(p2, p3),
        right_angle: angle_at(p2, p3, p4),
        right: distance(p3, p4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn rectangle_metrics_of_a_square_loop() {
        let loop_points = [
            pt(0.0, 0.0),
            pt(0.0, 20.0),
            pt(20.0, 20.0),
            pt(20.0, 0.0),
            pt(0.0, 0.0),
        ];
        let m = rectangle_metrics("p1", &loop_points);
        for side in m.sides {
            assert!((side - 20.0).abs() < 1e-12);
        }
        for angle in m.angles {
            assert!((angle - FRAC_PI_2).abs() < 1e-12);
        }
        assert!((m.min_ratio - 1.0).abs() < 1e-12);
        assert!((m.max_ratio - 1.0).abs() < 1e-12);
        assert!((m.area - 400.0).abs() < 1e-9);
    }

    #[test]
    fn rectangle_metrics_side_ratios() {
        let loop_points = [
            pt(0.0, 0.0),
            pt(0.0, 10.0),
            pt(40.0, 10.0),
            pt(40.0, 0.0),
            pt(0.0, 0.0),
        ];
        let m = rectangle_metrics("p2", &loop_points);
        assert!((m.min_ratio - 0.25).abs() < 1e-12);
        assert!((m.max_ratio - 4.0).abs() < 1e-12);
        assert!((m.area - 400.0).abs() < 1e-9);
    }

    #[test]
    fn box_metrics_of_axis_aligned_corners() {
        let corners = [pt(20.0, 10.0), pt(20.0, 0.0), pt(0.0, 0.0), pt(0.0, 20.0)];
        let m = box_metrics("p3", &corners);
        assert!((m.left - 10.0).abs() < 1e-12);
        assert!((m.mid - 20.0).abs() < 1e-12);
        assert!((m.right - 20.0).abs() < 1e-12);
        assert!((m.left_angle - FRAC_PI_2).abs() < 1e-12);
        assert!((m.right_angle - FRAC_PI_2).abs() < 1e-12);
        // Horizontal mid segment.
        assert!(m.rotation.abs() < 1e-9);
    }
}
