//! SQLite output boundary: three record families keyed by parcel id.

use rusqlite::{params, Connection};

use crate::error::ShapeError;
use crate::metrics::{BoxMetrics, ParcelSummary, RectangleMetrics};

/// Drop and recreate the three output tables.
pub fn create_tables(conn: &Connection) -> Result<(), ShapeError> {
    conn.execute_batch(
        "drop table if exists main;
         create table main (pid, nearest1, nearest2, numpoints);

         drop table if exists rectangle;
         create table rectangle (pid, side1, angle12, side2, angle23,
                                 side3, angle34, side4, angle41,
                                 minratio, maxratio, area);

         drop table if exists boxlike;
         create table boxlike (pid, hangle, left, langle, mid, rangle, right);",
    )?;
    Ok(())
}

pub fn insert_summaries(conn: &mut Connection, rows: &[ParcelSummary]) -> Result<(), ShapeError> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "insert into main (pid, nearest1, nearest2, numpoints)
             values (?1, ?2, ?3, ?4)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.id,
                row.nearest[0],
                row.nearest[1],
                row.significant_count as i64,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

pub fn insert_rectangles(
    conn: &mut Connection,
    rows: &[RectangleMetrics],
) -> Result<(), ShapeError> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "insert into rectangle
             (pid, side1, angle12, side2, angle23, side3, angle34,
              side4, angle41, minratio, maxratio, area)
             values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.id,
                row.sides[0],
                row.angles[0],
                row.sides[1],
                row.angles[1],
                row.sides[2],
                row.angles[2],
                row.sides[3],
                row.angles[3],
                row.min_ratio,
                row.max_ratio,
                row.area,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

pub fn insert_boxes(conn: &mut Connection, rows: &[BoxMetrics]) -> Result<(), ShapeError> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "insert into boxlike (pid, hangle, left, langle, mid, rangle, right)
             values (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.id,
                row.rotation,
                row.left,
                row.left_angle,
                row.mid,
                row.right_angle,
                row.right,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}
