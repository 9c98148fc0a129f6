//! Significant-point reduction: iterative removal of near-collinear points
//! from a closed ring.
//!
//! Per pass, every interior point carries a [`PointData`] with its
//! perpendicular offset from the line through its neighbors and whether its
//! projection falls between them. The single qualifying point with the
//! globally smallest offset is removed, the closure is repaired if the
//! removal touched either end of the interior, and only the one or two
//! windows that changed are recomputed. The loop reaches a fixed point when
//! no entry qualifies.

use kurbo::Point;

use crate::error::ShapeError;
use crate::geom::{
    is_close, less_or_close, perpendicular_offset, projection_within_segment, FLOAT_TOL,
};
use crate::ring::Ring;

/// Derived data for one interior point: its neighbor triple plus the two
/// scalars the removal predicate needs. Recomputed whole whenever the
/// triple changes, never patched field-wise.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PointData {
    pub left: Point,
    pub point: Point,
    pub right: Point,
    /// Perpendicular distance from `point` to the line `left`–`right`.
    /// NaN when the neighbors coincide; such an entry never qualifies.
    pub offset: f64,
    /// Projection of `point` onto segment `left`–`right` falls within it.
    pub between: bool,
}

impl PointData {
    pub fn new(left: Point, point: Point, right: Point) -> Self {
        PointData {
            left,
            point,
            right,
            offset: perpendicular_offset(left, point, right),
            between: projection_within_segment(left, point, right),
        }
    }
}

impl PartialEq for PointData {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left
            && self.point == other.point
            && self.right == other.right
            && self.between == other.between
            && is_close(self.offset, other.offset, FLOAT_TOL)
    }
}

/// One `PointData` per interior position of a second-wrapped ring,
/// index-aligned so entry `i` describes `seq[i + 1]`.
pub(crate) fn point_data(seq: &[Point]) -> Vec<PointData> {
    (1..seq.len() - 1)
        .map(|i| PointData::new(seq[i - 1], seq[i], seq[i + 1]))
        .collect()
}

/// Reduce a ring to its significant points.
///
/// Returns the surviving points in second-wrapped form: the closed loop
/// followed by a copy of its (possibly re-rooted) second point. A removal
/// of the ring's original start re-roots the loop at the preceding
/// survivor.
pub fn significant_points(ring: &Ring, tolerance: f64) -> Result<Vec<Point>, ShapeError> {
    if tolerance < 0.0 {
        return Err(ShapeError::NegativeTolerance(tolerance));
    }
    let mut sig = ring.second_wrapped();
    let mut data = point_data(&sig);
    remove_insignificant(&mut sig, &mut data, tolerance);
    Ok(sig)
}

fn remove_insignificant(sig: &mut Vec<Point>, data: &mut Vec<PointData>, tolerance: f64) {
    loop {
        let next_rmv = data
            .iter()
            .filter(|d| d.between && less_or_close(d.offset, tolerance))
            .map(|d| d.offset)
            .reduce(f64::min);
        let Some(next_rmv) = next_rmv else {
            break;
        };
        // First entry effectively equal to the global minimum wins ties.
        let index = match data
            .iter()
            .position(|d| d.between && is_close(d.offset, next_rmv, FLOAT_TOL))
        {
            Some(i) => i,
            None => break,
        };

        sig.remove(index + 1);
        data.remove(index);

        if index == 0 {
            // The removed point was the old second point; refresh its copy
            // at the tail of the wrap.
            let second = sig[1];
            let last = sig.len() - 1;
            sig[last] = second;
        }
        if index == data.len() {
            // The removed point was the closure point; re-root the loop at
            // the last surviving point.
            sig[0] = sig[index];
        }
        if index > 0 {
            data[index - 1] = PointData::new(sig[index - 1], sig[index], sig[index + 1]);
        }
        if index < data.len() {
            data[index] = PointData::new(sig[index], sig[index + 1], sig[index + 2]);
        }
        if index == data.len() && index > 0 {
            data[index - 1] = PointData::new(sig[index - 1], sig[index], sig[index + 1]);
        }
    }
}
