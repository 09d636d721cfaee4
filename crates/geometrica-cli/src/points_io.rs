//! Point file IO: CSV (columns x, y, z) via polars, or JSON point lists.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context as _};
use polars::prelude::*;
use serde_json::{json, Value};

use crate::request::points_from_value;

/// Input format by extension: `"csv"`, `"json"`, or `None` if unsupported.
pub fn point_format(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Some("csv"),
        Some("json") => Some("json"),
        _ => None,
    }
}

/// Read points from `.csv` or `.json`.
pub fn read_points(path: &Path) -> anyhow::Result<Vec<[f64; 3]>> {
    match point_format(path) {
        Some("csv") => read_csv(path),
        Some(_) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let value: Value = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            // accept either a bare list or {"points": [...]}
            let list = value.get("points").unwrap_or(&value);
            Ok(points_from_value(list)?)
        }
        _ => bail!("unsupported point file {} (expected .csv or .json)", path.display()),
    }
}

fn read_csv(path: &Path) -> anyhow::Result<Vec<[f64; 3]>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let mut cols: Vec<Vec<f64>> = Vec::with_capacity(3);
    for name in ["x", "y", "z"] {
        let series = df
            .column(name)
            .with_context(|| format!("{} has no '{name}' column", path.display()))?
            .cast(&DataType::Float64)?;
        let values = series
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.ok_or_else(|| anyhow!("row {row}: '{name}' is not numeric")))
            .collect::<anyhow::Result<Vec<f64>>>()?;
        cols.push(values);
    }
    Ok((0..df.height())
        .map(|i| [cols[0][i], cols[1][i], cols[2][i]])
        .collect())
}

/// Write points as `{"points": [[x, y, z], ...]}`.
pub fn write_points(path: &Path, points: &[[f64; 3]]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let doc = json!({ "points": points });
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
