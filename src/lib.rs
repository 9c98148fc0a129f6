//! shp2box: parcel boundary rings → shape metrics.
//!
//! Reduces each closed parcel outline to its significant points, classifies
//! the result as rectangle and/or boxlike, and computes nearest-neighbor
//! distances between parcel centroids.
//!
//! # Example
//!
//! ```no_run
//! use shp2box::{analyze, AnalysisConfig};
//! use shp2box::io::shp::read_parcels;
//! use std::path::Path;
//!
//! let parcels = read_parcels(Path::new("parcels.shp"), "PID")?;
//! let result = analyze(&parcels, &AnalysisConfig::default())?;
//! // result.rectangles holds per-parcel rectangle metrics
//! # Ok::<(), shp2box::ShapeError>(())
//! ```

#![forbid(unsafe_code)]

pub mod classify;
mod config;
pub mod error;
pub mod geom;
pub mod io;
pub mod metrics;
pub mod nearest;
pub mod reduce;
pub mod ring;

pub use config::AnalysisConfig;
pub use error::ShapeError;

use kurbo::Point;
use rayon::prelude::*;

use crate::classify::{detect_box, detect_rectangle};
use crate::io::shp::ParcelShape;
use crate::metrics::{box_metrics, rectangle_metrics, BoxMetrics, ParcelSummary, RectangleMetrics};
use crate::nearest::{nearest_distances, PointKey};
use crate::reduce::significant_points;
use crate::ring::{remove_wrap, split_parts, Ring};

/// The output tables record a first and second nearest distance.
const NEAREST_COUNT: usize = 2;

/// The three record families produced by a batch run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub summaries: Vec<ParcelSummary>,
    pub rectangles: Vec<RectangleMetrics>,
    pub boxes: Vec<BoxMetrics>,
    /// Parcels dropped because their ring failed validation.
    pub skipped: usize,
}

#[derive(Debug)]
struct Outcome {
    id: String,
    centroid: Point,
    significant_count: usize,
    rectangle: Option<Vec<Point>>,
    box_corners: Option<[Point; 4]>,
}

/// Analyze a batch of parcel shapes.
///
/// Rings are independent, so the per-parcel work runs in parallel. A ring
/// that fails validation is logged and skipped rather than aborting the
/// batch. Nearest-neighbor distances are computed over the centroids of
/// the parcels that survived, which needs at least `NEAREST_COUNT + 1` of
/// them.
pub fn analyze(
    shapes: &[ParcelShape],
    config: &AnalysisConfig,
) -> Result<AnalysisResult, ShapeError> {
    let outcomes: Vec<Option<Outcome>> = shapes
        .par_iter()
        .map(|shape| match analyze_one(shape, config) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                log::warn!("skipping parcel {}: {err}", shape.id);
                None
            }
        })
        .collect();

    let skipped = outcomes.iter().filter(|o| o.is_none()).count();
    let outcomes: Vec<Outcome> = outcomes.into_iter().flatten().collect();

    let centroids: Vec<Point> = outcomes.iter().map(|o| o.centroid).collect();
    let distances = nearest_distances(&centroids, NEAREST_COUNT)?;

    let mut summaries = Vec::with_capacity(outcomes.len());
    let mut rectangles = Vec::new();
    let mut boxes = Vec::new();
    for outcome in &outcomes {
        let nearest = match distances.get(&PointKey::new(outcome.centroid)) {
            Some(d) => [
                d.first().copied().unwrap_or(f64::NAN),
                d.get(1).copied().unwrap_or(f64::NAN),
            ],
            None => [f64::NAN; 2],
        };
        summaries.push(ParcelSummary {
            id: outcome.id.clone(),
            nearest,
            significant_count: outcome.significant_count,
        });
        if let Some(loop_points) = &outcome.rectangle {
            rectangles.push(rectangle_metrics(&outcome.id, loop_points));
        }
        if let Some(corners) = &outcome.box_corners {
            boxes.push(box_metrics(&outcome.id, corners));
        }
    }

    Ok(AnalysisResult {
        summaries,
        rectangles,
        boxes,
        skipped,
    })
}

/// Analyze a single parcel: outer ring only for multi-part shapes.
fn analyze_one(shape: &ParcelShape, config: &AnalysisConfig) -> Result<Outcome, ShapeError> {
    let outer = split_parts(&shape.points, &shape.parts)
        .next()
        .unwrap_or(&[]);
    let ring = Ring::new(outer.to_vec())?;

    let sig = significant_points(&ring, config.line_tolerance)?;
    let significant_count = remove_wrap(&sig).len();
    let centroid = geom::centroid(ring.closed());

    let rectangle = detect_rectangle(&ring, config.line_tolerance, config.angle_tolerance)?;
    let box_corners = detect_box(
        &ring,
        config.line_tolerance,
        config.angle_tolerance,
        config.box_min_len,
        config.box_max_len,
    )?;

    Ok(Outcome {
        id: shape.id.clone(),
        centroid,
        significant_count,
        rectangle,
        box_corners,
    })
}
