use std::fs;

use serde_json::json;

use crate::error::{Error, Result};
use crate::metrics::BenchmarkResult;

/// exports run statistics as JSON for downstream analysis tooling
pub fn export_stats(filename: &str, result: &BenchmarkResult) -> Result<()> {
    let stats = json!({
        "algorithm": result.algorithm,
        "graph_name": result.graph_name,
        "vertices": result.vertices,
        "edges": result.edges,
        "colors_used": result.colors_used,
        "known_optimal": result.known_optimal,
        "runtime_ms": result.runtime_ms,
    });
    fs::write(filename, stats.to_string()).map_err(|e| Error::io(filename, e))
}
