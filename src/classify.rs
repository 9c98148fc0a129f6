//! Rectangle and boxlike pattern detection over a reduced ring.
//!
//! Both detectors run the significant-point reduction first and then make a
//! single pure pass over the surviving points; no state is retained across
//! calls.

use kurbo::Point;

use crate::error::ShapeError;
use crate::geom::{distance, less_or_close, orthogonal, same_side};
use crate::reduce::significant_points;
use crate::ring::{neighbor_window, point_windows, remove_wrap, wrap_to, Ring};

/// Scan a reduced ring for a boxlike feature: four consecutive significant
/// points with right angles at both interior corners, the second and third
/// points on the same side, and a mid-segment length within
/// `[min_len, max_len]` (tolerant at both bounds).
///
/// Returns the first qualifying window in ring order, not the best one.
/// A ring that reduces below five entries cannot hold the pattern.
pub fn detect_box(
    ring: &Ring,
    line_tolerance: f64,
    angle_tolerance: f64,
    min_len: f64,
    max_len: f64,
) -> Result<Option<[Point; 4]>, ShapeError> {
    let sig = significant_points(ring, line_tolerance)?;

    if sig.len() < 5 {
        return Ok(None);
    }

    for i in 1..sig.len() - 2 {
        let w = neighbor_window(&sig, i, 2)?;
        let (p1, p2, p3, p4) = (w[0], w[1], w[2], w[3]);

        let mid_dist = distance(p2, p3);
        if orthogonal(p1, p2, p3, angle_tolerance)?
            && orthogonal(p2, p3, p4, angle_tolerance)?
            && same_side(p1, p2, p3, p4)
            && less_or_close(mid_dist, max_len)
            && less_or_close(min_len, mid_dist)
        {
            return Ok(Some([p1, p2, p3, p4]));
        }
    }
    Ok(None)
}

/// Accept a ring whose reduction leaves exactly four distinct points, all
/// four corners orthogonal within `angle_tolerance`.
///
/// Returns the four corners rewrapped into a five-point closed loop.
pub fn detect_rectangle(
    ring: &Ring,
    line_tolerance: f64,
    angle_tolerance: f64,
) -> Result<Option<Vec<Point>>, ShapeError> {
    let sig = significant_points(ring, line_tolerance)?;
    let arr = remove_wrap(&sig);
    if arr.len() != 4 {
        return Ok(None);
    }
    // Rewrap by two so the corner windows straddle the closure.
    for w in point_windows(&wrap_to(&sig, 2), 1) {
        if !orthogonal(w[0], w[1], w[2], angle_tolerance)? {
            return Ok(None);
        }
    }
    Ok(Some(wrap_to(arr, 1)))
}
