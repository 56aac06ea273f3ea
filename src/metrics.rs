use std::fs::{self, OpenOptions};
use std::io::Write;

use crate::error::{Error, Result};

/// fixed CSV schema, written once per results file
const CSV_HEADER: &str = "algorithm,graph_name,vertices,edges,colors_used,known_optimal,runtime_ms";

/** One benchmark measurement, appended as a CSV row. */
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// strategy name as accepted by the dispatcher
    pub algorithm: String,
    /// graph identifier (file name unless overridden)
    pub graph_name: String,
    /// nb vertices
    pub vertices: usize,
    /// nb edges
    pub edges: usize,
    /// number of distinct colors in the returned coloring
    pub colors_used: usize,
    /// known chromatic number, when available
    pub known_optimal: Option<i64>,
    /// wall-clock runtime in milliseconds
    pub runtime_ms: f64,
}

/** appends a result row to the CSV at `path`, writing the header first
iff the file is absent or empty. The runtime keeps 3 decimal places. */
pub fn append_result_csv(path: &str, result: &BenchmarkResult) -> Result<()> {
    let needs_header = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    let mut row = String::new();
    if needs_header {
        row.push_str(CSV_HEADER);
        row.push('\n');
    }
    let known = match result.known_optimal {
        None => String::new(),
        Some(v) => v.to_string(),
    };
    row.push_str(&format!(
        "{},{},{},{},{},{},{:.3}\n",
        result.algorithm,
        result.graph_name,
        result.vertices,
        result.edges,
        result.colors_used,
        known,
        result.runtime_ms
    ));
    file.write_all(row.as_bytes()).map_err(|e| Error::io(path, e))
}
