//! CSV output: benchmark timings and tree structure dumps.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::index::SpatialIndex;

/// One row of the timing table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BenchRecord {
    pub distribution: String,
    pub num_points: usize,
    /// Seconds.
    pub quadtree_time: f64,
    /// Seconds.
    pub pointquadtree_time: f64,
}

/// One row of a structure dump. `boundary_width`/`boundary_height` are half
/// extents; the point columns are empty for a node holding nothing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeRecord {
    pub boundary_x: f64,
    pub boundary_y: f64,
    pub boundary_width: f64,
    pub boundary_height: f64,
    pub point_x: Option<f64>,
    pub point_y: Option<f64>,
}

pub fn write_results<W: io::Write>(writer: W, records: &[BenchRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_results<P: AsRef<Path>>(path: P, records: &[BenchRecord]) -> Result<(), ExportError> {
    write_results(File::create(path)?, records)
}

/// Writes one row per stored point, in the tree's walk order. Empty nodes
/// still get a row so the node geometry survives.
pub fn write_structure<W: io::Write, T: SpatialIndex + ?Sized>(
    writer: W,
    tree: &T,
) -> Result<(), ExportError> {
    let mut rows = Vec::new();
    tree.walk(&mut |node| {
        let record = |point: Option<(f64, f64)>| NodeRecord {
            boundary_x: node.bounds.x(),
            boundary_y: node.bounds.y(),
            boundary_width: node.bounds.half_width(),
            boundary_height: node.bounds.half_height(),
            point_x: point.map(|p| p.0),
            point_y: point.map(|p| p.1),
        };
        if node.points.is_empty() {
            rows.push(record(None));
        } else {
            rows.extend(node.points.iter().map(|p| record(Some((p.x(), p.y())))));
        }
    });

    let mut writer = csv::Writer::from_writer(writer);
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_structure<P: AsRef<Path>, T: SpatialIndex + ?Sized>(
    path: P,
    tree: &T,
) -> Result<(), ExportError> {
    write_structure(File::create(path)?, tree)
}

pub fn read_structure<R: io::Read>(reader: R) -> Result<Vec<NodeRecord>, ExportError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
