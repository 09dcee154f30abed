//! CSV target loader.
//!
//! # CSV format
//!
//! One row per target point, in assignment order:
//!
//! ```csv
//! x,y
//! 15,0
//! 16,0
//! 15.5,3.25
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use sw_core::Vec2;

use crate::{LayoutError, TargetSet};

#[derive(Deserialize)]
struct TargetRecord {
    x: f64,
    y: f64,
}

/// Load a [`TargetSet`] from a CSV file.
pub fn load_targets_csv(path: &Path) -> Result<TargetSet, LayoutError> {
    let file = std::fs::File::open(path).map_err(LayoutError::Io)?;
    load_targets_reader(file)
}

/// Like [`load_targets_csv`] but accepts any `Read` source.
pub fn load_targets_reader<R: Read>(reader: R) -> Result<TargetSet, LayoutError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();

    for (row, result) in csv_reader.deserialize::<TargetRecord>().enumerate() {
        let rec = result.map_err(|e| LayoutError::Parse(format!("row {row}: {e}")))?;
        let p = Vec2::new(rec.x, rec.y);
        if !p.is_finite() {
            return Err(LayoutError::Parse(format!("row {row}: non-finite coordinate")));
        }
        points.push(p);
    }

    Ok(TargetSet::new(points))
}
