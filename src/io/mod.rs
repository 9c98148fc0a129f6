//! Thin I/O adapters around the analysis core: shapefile input, SQLite
//! output. No geometry lives here.

pub mod db;
pub mod shp;
