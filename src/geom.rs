//! Shared geometric predicates over 2D points.
//!
//! All tolerance handling goes through [`is_close`], which mirrors the
//! relative-tolerance comparison used throughout the pipeline (rel_tol
//! 1e-9, no absolute floor). Comparisons on NaN are false, so predicates
//! fed degenerate geometry fail closed rather than panic.

use kurbo::Point;

use crate::error::ShapeError;

/// Default relative tolerance for float equivalence.
pub const FLOAT_TOL: f64 = 1e-9;

/// Relative-tolerance float equivalence: |a - b| <= rel_tol * max(|a|, |b|).
///
/// With no absolute floor, `is_close(x, 0.0, _)` holds only for exact zero.
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

/// `a < b`, or effectively equal.
pub fn less_or_close(a: f64, b: f64) -> bool {
    a < b || is_close(a, b, FLOAT_TOL)
}

/// True if |value| is below `within`, tolerantly.
///
/// Errors on a negative bound: a negative tolerance is a caller bug, not a
/// geometry outcome.
pub fn within_tolerance(value: f64, within: f64, float_tol: f64) -> Result<bool, ShapeError> {
    if within < 0.0 {
        return Err(ShapeError::NegativeTolerance(within));
    }
    let abs_value = value.abs();
    Ok(abs_value < within || is_close(abs_value, within, float_tol))
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Unsigned angle at `vertex` formed by `a` and `c`, in radians [0, pi].
///
/// NaN when either arm has zero length; tolerance comparisons on the
/// result are then false, so orthogonality tests fail closed.
pub fn angle_at(a: Point, vertex: Point, c: Point) -> f64 {
    let v1 = a - vertex;
    let v2 = c - vertex;
    (v1.dot(v2) / (v1.hypot() * v2.hypot())).acos()
}

/// Unsigned perpendicular distance from `mid` to the infinite line `a`–`c`.
///
/// NaN when `a == c` (no line is defined).
pub fn perpendicular_offset(a: Point, mid: Point, c: Point) -> f64 {
    if a == c {
        return f64::NAN;
    }
    let outer = c - a;
    (outer.cross(a - mid) / outer.hypot()).abs()
}

/// True if the projection of `mid` onto segment `a`–`c` falls within the
/// segment, endpoints included tolerantly. False when `a == c`.
pub fn projection_within_segment(a: Point, mid: Point, c: Point) -> bool {
    if a == c {
        return false;
    }
    let outer = c - a;
    let norm_outer = outer.hypot();
    let scalar_proj = (mid - a).dot(outer / norm_outer);
    less_or_close(0.0, scalar_proj) && less_or_close(scalar_proj, norm_outer)
}

/// Middle point lies on the line through its neighbors within `tolerance`,
/// and its projection falls between them.
pub fn points_inline(a: Point, mid: Point, c: Point, tolerance: f64) -> Result<bool, ShapeError> {
    let offset = perpendicular_offset(a, mid, c);
    let inline = within_tolerance(offset, tolerance, FLOAT_TOL)?;
    Ok(inline && projection_within_segment(a, mid, c))
}

/// Corner at `vertex` is a right angle within `angle_tolerance` radians.
pub fn orthogonal(
    a: Point,
    vertex: Point,
    c: Point,
    angle_tolerance: f64,
) -> Result<bool, ShapeError> {
    let rad = angle_at(a, vertex, c);
    within_tolerance(rad - std::f64::consts::FRAC_PI_2, angle_tolerance, FLOAT_TOL)
}

/// Heuristic same-side test: the angle from `p1` to the base segment
/// strictly exceeds the angle from `p1` to `p2`, both measured at
/// `line_start`.
///
/// This is a behavioral contract, not a general geometric primitive: it is
/// an angle comparison, sensitive to point ordering, and not equivalent to
/// a cross-product sign test. The classifier depends on these exact
/// semantics.
pub fn same_side(p1: Point, line_start: Point, line_end: Point, p2: Point) -> bool {
    let to_base = angle_at(p1, line_start, line_end);
    let to_p2 = angle_at(p1, line_start, p2);
    to_base > to_p2
}

/// Unsigned area via the shoelace formula.
///
/// Works on open or closed point lists: a duplicate closure point
/// contributes zero extra area.
pub fn area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let sum: f64 = (0..n)
        .map(|i| {
            let j = (i + n - 1) % n;
            points[i].x * points[j].y - points[j].x * points[i].y
        })
        .sum();
    sum.abs() / 2.0
}

/// Arithmetic mean of the distinct ring points (duplicate closure excluded).
pub fn centroid(points: &[Point]) -> Point {
    let pts = if points.len() > 1 && points[0] == points[points.len() - 1] {
        &points[..points.len() - 1]
    } else {
        points
    };
    let n = pts.len() as f64;
    let (sum_x, sum_y) = pts
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sum_x / n, sum_y / n)
}

/// Rotation of the segment `left`–`right` relative to the horizontal axis
/// through `left`, reduced modulo pi/2.
///
/// All four orientations of a right-angle corner report the same value.
pub fn midline_rotation(left: Point, right: Point) -> f64 {
    let horiz = Point::new(left.x + 1.0, left.y);
    angle_at(horiz, left, right) % std::f64::consts::FRAC_PI_2
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, PI};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn less_or_close_simple() {
        assert!(less_or_close(0.0, 1.0));
        assert!(!less_or_close(1.0, 0.0));
        assert!(less_or_close(1.0, 1.0));
        // 1.01 - 1 = 0.010000000000000009
        assert!(less_or_close(1.01 - 1.0, 0.01));
    }

    #[test]
    fn within_tolerance_cases() {
        assert!(within_tolerance(90.001 - 90.0, 0.001, FLOAT_TOL).unwrap());
        assert!(!within_tolerance(90.001 - 90.0, 0.0001, FLOAT_TOL).unwrap());
        assert!(!within_tolerance(90.0 - 90.001, 0.0001, FLOAT_TOL).unwrap());
        assert!(!within_tolerance(0.5, 0.4, FLOAT_TOL).unwrap());
        assert!(!within_tolerance(0.5, 0.49, 0.0).unwrap());
    }

    #[test]
    fn within_tolerance_negative_bound_errors() {
        assert!(matches!(
            within_tolerance(0.1, -0.1, FLOAT_TOL),
            Err(ShapeError::NegativeTolerance(_))
        ));
    }

    #[test]
    fn perpendicular_offset_cases() {
        let off = perpendicular_offset(pt(0.0, 0.0), pt(1.0, 1.0), pt(0.0, 2.0));
        assert!((off - 1.0).abs() < 1e-12);
        let off = perpendicular_offset(pt(0.0, 0.0), pt(1.0, 2.0), pt(2.0, 0.0));
        assert!((off - 2.0).abs() < 1e-12);
    }

    #[test]
    fn perpendicular_offset_coincident_endpoints_is_nan() {
        assert!(perpendicular_offset(pt(1.0, 1.0), pt(2.0, 2.0), pt(1.0, 1.0)).is_nan());
    }

    #[test]
    fn projection_between_neighbors() {
        // Past the far endpoint, in both directions.
        assert!(!projection_within_segment(pt(1.0, 1.0), pt(2.0, 2.1), pt(2.0, 2.0)));
        assert!(!projection_within_segment(pt(2.0, 2.0), pt(2.0, 2.1), pt(1.0, 1.0)));
        // Interior and exactly on the endpoints.
        assert!(projection_within_segment(pt(2.0, 2.0), pt(1.0, 2.0), pt(1.0, 1.0)));
        assert!(projection_within_segment(pt(2.0, 2.0), pt(1.0, 1.0), pt(1.0, 1.0)));
        assert!(projection_within_segment(pt(2.0, 2.0), pt(2.0, 2.0), pt(1.0, 1.0)));
    }

    #[test]
    fn points_inline_on_axis() {
        assert!(points_inline(pt(0.0, 0.0), pt(0.0, 1.0), pt(0.0, 2.0), 0.0).unwrap());
        assert!(!points_inline(pt(0.0, 0.0), pt(0.1, 1.0), pt(0.0, 2.0), 0.0).unwrap());
        assert!(points_inline(pt(0.0, 0.0), pt(0.1, 1.0), pt(0.0, 2.0), 0.1).unwrap());
        assert!(points_inline(pt(0.0, 0.0), pt(-0.1, 1.0), pt(0.0, 2.0), 0.1).unwrap());
        assert!(!points_inline(pt(0.0, 0.0), pt(-0.5, 1.0), pt(0.0, 2.0), 0.3).unwrap());
    }

    #[test]
    fn points_inline_diagonal_and_endpoints() {
        assert!(points_inline(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0), 0.0).unwrap());
        assert!(!points_inline(pt(1.0, 1.0), pt(0.9, 1.0), pt(2.0, 2.0), 0.5).unwrap());
        assert!(!points_inline(pt(1.0, 1.0), pt(2.0, 2.1), pt(2.0, 2.0), 0.5).unwrap());
        assert!(points_inline(pt(1.0, 1.0), pt(1.0, 1.0), pt(2.0, 2.0), 0.1).unwrap());
        assert!(points_inline(pt(1.0, 1.0), pt(2.0, 2.0), pt(2.0, 2.0), 0.1).unwrap());
        assert!(points_inline(pt(0.0, 2.0), pt(0.0, 1.0), pt(0.0, 0.0), 0.1).unwrap());
    }

    #[test]
    fn angle_at_reference_angles() {
        assert_eq!(angle_at(pt(0.0, 1.0), pt(0.0, 0.0), pt(0.0, 1.0)), 0.0);
        assert_eq!(angle_at(pt(0.0, 1.0), pt(0.0, 0.0), pt(0.0, -1.0)), PI);
        let right_angles = [
            angle_at(pt(0.0, 1.0), pt(0.0, 0.0), pt(1.0, 0.0)),
            angle_at(pt(0.0, 3.0), pt(0.0, 0.0), pt(1.7, 0.0)),
            angle_at(pt(1.0, 3.0), pt(1.0, 1.0), pt(1.7, 1.0)),
        ];
        for rad in right_angles {
            assert!((rad - FRAC_PI_2).abs() < 1e-12);
        }
    }

    #[test]
    fn orthogonal_within_and_outside_tolerance() {
        assert!(orthogonal(pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0), 0.04).unwrap());
        assert!(orthogonal(pt(1.0, 1.0), pt(0.0, 1.0), pt(0.0, 0.0), 0.04).unwrap());
        assert!(!orthogonal(pt(0.0, 1.0), pt(0.0, 0.0), pt(1.0, 0.045), 0.04).unwrap());
        assert!(orthogonal(pt(0.0, 1.0), pt(0.0, 0.0), pt(1.0, 0.045), 0.05).unwrap());
        assert!(orthogonal(pt(0.0, 1.0), pt(0.0, 0.0), pt(1.0, 0.04), 0.04).unwrap());
    }

    #[test]
    fn same_side_of_diagonal() {
        let start = pt(0.0, 0.0);
        let end = pt(1.0, 1.0);
        assert!(same_side(pt(1.0, 0.0), start, end, pt(2.0, 1.0)));
        assert!(same_side(pt(0.0, 1.0), start, end, pt(1.0, 2.0)));
        assert!(!same_side(pt(1.0, 0.0), start, end, pt(1.0, 2.0)));
    }

    #[test]
    fn distance_cases() {
        assert!((distance(pt(0.0, 0.0), pt(0.0, 1.0)) - 1.0).abs() < 1e-12);
        assert!((distance(pt(0.0, 0.0), pt(0.0, 2.0)) - 2.0).abs() < 1e-12);
        assert!((distance(pt(0.0, 0.0), pt(1.0, 1.7320508076)) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn centroid_square_and_triangle() {
        let square = [pt(0.0, 0.0), pt(0.0, 2.0), pt(2.0, 2.0), pt(2.0, 0.0)];
        assert_eq!(centroid(&square), pt(1.0, 1.0));

        let closed = [
            pt(0.0, 0.0),
            pt(0.0, 2.0),
            pt(2.0, 2.0),
            pt(2.0, 0.0),
            pt(0.0, 0.0),
        ];
        assert_eq!(centroid(&closed), pt(1.0, 1.0));

        let tri = [pt(0.0, 0.0), pt(2.0, 2.0), pt(4.0, 0.0)];
        let c = centroid(&tri);
        assert!((c.x - 2.0).abs() < 1e-12);
        assert!((c.y - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn centroid_invariant_under_rotation_of_start() {
        // Same ring, different closure point, same centroid.
        let a = [
            pt(0.0, 0.0),
            pt(0.0, 2.0),
            pt(2.0, 2.0),
            pt(2.0, 0.0),
            pt(0.0, 0.0),
        ];
        let b = [
            pt(2.0, 2.0),
            pt(2.0, 0.0),
            pt(0.0, 0.0),
            pt(0.0, 2.0),
            pt(2.0, 2.0),
        ];
        assert_eq!(centroid(&a), centroid(&b));
    }

    #[test]
    fn area_unit_square() {
        let closed = [
            pt(0.0, 0.0),
            pt(0.0, 1.0),
            pt(1.0, 1.0),
            pt(1.0, 0.0),
            pt(0.0, 0.0),
        ];
        assert_eq!(area(&closed), 1.0);
        // Closure point contributes nothing.
        assert_eq!(area(&closed[..4]), 1.0);
    }

    #[test]
    fn midline_rotation_cases() {
        let r = midline_rotation(pt(1.0, 2.0), pt(2.0, 1.0));
        assert!((r - FRAC_PI_4).abs() < 1e-9);
        let r = midline_rotation(pt(0.0, 0.0), pt(0.0, 1.0));
        assert!(r.abs() < 1e-9);
        let r = midline_rotation(pt(0.0, 0.0), pt(1.0, 0.41421356237));
        assert!((r - FRAC_PI_8).abs() < 1e-9);
        let r = midline_rotation(pt(0.0, 0.0), pt(1.0, -0.41421356237));
        assert!((r - FRAC_PI_8).abs() < 1e-9);
    }
}
