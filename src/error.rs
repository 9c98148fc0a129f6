use thiserror::Error;

/// Errors that can occur during shape analysis.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ShapeError {
    #[error("ring must have at least 3 points, got {0}")]
    TooFewPoints(usize),

    #[error("sequence of length {len} has no window of size {need}")]
    WindowLength { len: usize, need: usize },

    #[error("window index {index} out of range [1, {max}] for sequence of length {len}")]
    WindowIndex { index: usize, max: usize, len: usize },

    #[error("tolerance cannot be negative, got {0}")]
    NegativeTolerance(f64),

    #[error("point ({0}, {1}) not found in sequence")]
    PointNotFound(f64, f64),

    #[error("neighbor count must be at least 1, got {0}")]
    InvalidNearestCount(usize),

    #[error("need more than {requested} points for {requested} neighbors, got {len}")]
    NotEnoughNeighbors { len: usize, requested: usize },

    #[error("shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
