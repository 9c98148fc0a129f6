//! Shapefile input boundary.
//!
//! Each record is handed to the core as a flat point buffer plus part
//! start offsets, the same contract the windowing utilities consume via
//! `split_parts`. Geometry interpretation stays in the core.

use std::path::Path;

use kurbo::Point;
use shapefile::{PolygonRing, Shape};

use crate::error::ShapeError;

/// One shape record: opaque id, flat point buffer, part start offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelShape {
    pub id: String,
    pub points: Vec<Point>,
    /// 0-based offsets into `points`, one per ring part.
    pub parts: Vec<usize>,
}

/// Read all polygon records from a shapefile.
///
/// The parcel id comes from `id_field` in the attribute table, falling
/// back to the record index when the field is absent or empty. Non-polygon
/// shapes are skipped with a warning.
pub fn read_parcels(path: &Path, id_field: &str) -> Result<Vec<ParcelShape>, ShapeError> {
    let mut reader = shapefile::Reader::from_path(path)?;
    let mut parcels = Vec::new();

    for (index, pair) in reader.iter_shapes_and_records().enumerate() {
        let (shape, record) = pair?;
        let id = record_id(&record, id_field).unwrap_or_else(|| index.to_string());

        let polygon = match shape {
            Shape::Polygon(polygon) => polygon,
            other => {
                log::warn!("record {index}: skipping non-polygon shape {}", other.shapetype());
                continue;
            }
        };

        let mut points = Vec::new();
        let mut parts = Vec::new();
        for ring in polygon.rings() {
            let ring_points = match ring {
                PolygonRing::Outer(pts) | PolygonRing::Inner(pts) => pts,
            };
            parts.push(points.len());
            points.extend(ring_points.iter().map(|p| Point::new(p.x, p.y)));
        }

        parcels.push(ParcelShape { id, points, parts });
    }
    Ok(parcels)
}

fn record_id(record: &shapefile::dbase::Record, field: &str) -> Option<String> {
    use shapefile::dbase::FieldValue;
    match record.get(field)? {
        FieldValue::Character(Some(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        FieldValue::Numeric(Some(n)) => Some(n.to_string()),
        FieldValue::Integer(n) => Some(n.to_string()),
        FieldValue::Double(n) => Some(n.to_string()),
        _ => None,
    }
}
