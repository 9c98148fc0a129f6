//! Nearest-neighbor distances between shape centroids.
//!
//! A static k-d tree is built once per batch and discarded; there are no
//! incremental updates. Results are keyed by exact coordinate identity.

use std::collections::HashMap;

use kiddo::{KdTree, SquaredEuclidean};
use kurbo::Point;

use crate::error::ShapeError;

/// Exact coordinate identity of a point, hashable by f64 bit pattern.
///
/// Two keys are equal iff the coordinates are bit-identical; points that
/// went through different arithmetic do not collide "by value".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey {
    x: u64,
    y: u64,
}

impl PointKey {
    pub fn new(p: Point) -> Self {
        PointKey {
            x: p.x.to_bits(),
            y: p.y.to_bits(),
        }
    }

    pub fn point(&self) -> Point {
        Point::new(f64::from_bits(self.x), f64::from_bits(self.y))
    }
}

impl From<Point> for PointKey {
    fn from(p: Point) -> Self {
        PointKey::new(p)
    }
}

/// For every point, its `num_nearest` nearest non-self distances in
/// ascending order.
///
/// Queries `num_nearest + 1` neighbors and drops the leading self-match at
/// distance zero.
pub fn nearest_distances(
    points: &[Point],
    num_nearest: usize,
) -> Result<HashMap<PointKey, Vec<f64>>, ShapeError> {
    if num_nearest < 1 {
        return Err(ShapeError::InvalidNearestCount(num_nearest));
    }
    if points.len() <= num_nearest {
        return Err(ShapeError::NotEnoughNeighbors {
            len: points.len(),
            requested: num_nearest,
        });
    }

    let mut tree: KdTree<f64, 2> = KdTree::new();
    for (i, p) in points.iter().enumerate() {
        tree.add(&[p.x, p.y], i as u64);
    }

    let mut distances = HashMap::with_capacity(points.len());
    for p in points {
        let neighbors = tree.nearest_n::<SquaredEuclidean>(&[p.x, p.y], num_nearest + 1);
        let dists: Vec<f64> = neighbors
            .iter()
            .skip(1)
            .map(|n| n.distance.sqrt())
            .collect();
        distances.insert(PointKey::new(*p), dists);
    }
    Ok(distances)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn corner_points() -> Vec<Point> {
        vec![pt(0.0, 0.0), pt(0.0, 1.0), pt(3.0, 0.0), pt(0.0, 2.5)]
    }

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{a} != {e}");
        }
    }

    #[test]
    fn one_nearest() {
        let map = nearest_distances(&corner_points(), 1).unwrap();
        assert_all_close(&map[&PointKey::new(pt(0.0, 0.0))], &[1.0]);
        assert_all_close(&map[&PointKey::new(pt(0.0, 1.0))], &[1.0]);
        assert_all_close(&map[&PointKey::new(pt(3.0, 0.0))], &[3.0]);
        assert_all_close(&map[&PointKey::new(pt(0.0, 2.5))], &[1.5]);
    }

    #[test]
    fn two_nearest_ascending() {
        let map = nearest_distances(&corner_points(), 2).unwrap();
        assert_all_close(&map[&PointKey::new(pt(0.0, 0.0))], &[1.0, 2.5]);
        assert_all_close(&map[&PointKey::new(pt(0.0, 1.0))], &[1.0, 1.5]);
        assert_all_close(&map[&PointKey::new(pt(3.0, 0.0))], &[3.0, 3.16227766]);
        assert_all_close(&map[&PointKey::new(pt(0.0, 2.5))], &[1.5, 2.5]);
    }

    #[test]
    fn zero_neighbors_is_invalid() {
        assert!(matches!(
            nearest_distances(&corner_points(), 0),
            Err(ShapeError::InvalidNearestCount(0))
        ));
    }

    #[test]
    fn more_neighbors_than_points_is_invalid() {
        assert!(matches!(
            nearest_distances(&corner_points(), 4),
            Err(ShapeError::NotEnoughNeighbors { .. })
        ));
    }

    #[test]
    fn key_round_trips_coordinates() {
        let p = pt(1.25, -3.5);
        assert_eq!(PointKey::new(p).point(), p);
    }
}
